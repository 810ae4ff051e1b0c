//! 桃園市門牌地址の一括查詢ツール
//!
//! 住所の正規化は `address_common`、ここでは設定・查詢コマンド・Excel入出力を扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod launcher;
pub mod lookup;
pub mod runner;
pub mod workbook;

