//! 門牌查詢（外部コラボレータ）
//!
//! 查詢サイトの操作はヘッドレスブラウザを動かす外部コマンドに任せ、
//! ここでは「住所を渡して結果文字列を受け取る」だけを扱う。

mod command;

pub use address_common::LookupOutcome;
pub use command::{parse_response, CommandLookup, LOOKUP_URL_ENV, NOT_FOUND_TEXT};

use crate::error::Result;

/// 住所查詢のインターフェース
///
/// 該当なしは `Ok(LookupOutcome::NotFound)`、通信・画面構造の異常は `Err`。
#[allow(async_fn_in_trait)]
pub trait AddressLookup {
    async fn lookup(&mut self, query: &str) -> Result<LookupOutcome>;
}
