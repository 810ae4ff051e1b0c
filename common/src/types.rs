//! 問い合わせ結果と書き込み用レコードの型定義

use serde::{Deserialize, Serialize};

/// 市名
pub const CITY_NAME: &str = "桃園市";

/// 問い合わせ失敗の表記
pub const QUERY_FAILED: &str = "查詢失敗";

/// 該当なしの表記
pub const NO_RESULT: &str = "查無結果";

/// 外部問い合わせの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOutcome {
    /// 一致した正規住所（市名なし）
    Found(String),
    /// 該当なし
    NotFound,
    /// 待ち時間内に応答がなかった（該当なし扱い）
    TimedOut,
}

/// 1行分の処理結果の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// 入力が空
    Blank,
    /// 問い合わせ結果あり
    Found(String),
    /// 該当なし
    NotFound,
    /// 問い合わせ中のエラー
    Failed,
}

impl From<LookupOutcome> for RowOutcome {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(result) => RowOutcome::Found(result),
            LookupOutcome::NotFound | LookupOutcome::TimedOut => RowOutcome::NotFound,
        }
    }
}

/// 完全住所欄の値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullAddress {
    Blank,
    Resolved(String),
    NotFound,
    Failed,
}

impl std::fmt::Display for FullAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FullAddress::Blank => Ok(()),
            FullAddress::Resolved(address) => write!(f, "{}", address),
            FullAddress::NotFound => write!(f, "{}", NO_RESULT),
            FullAddress::Failed => write!(f, "{}", QUERY_FAILED),
        }
    }
}

/// スプレッドシートに書き込む1行分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// C欄: 完整地址
    pub full_address: FullAddress,
    /// D欄: 不含鄰的地址（整形済み）
    pub short_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_address_display() {
        assert_eq!(FullAddress::Blank.to_string(), "");
        assert_eq!(FullAddress::NotFound.to_string(), "查無結果");
        assert_eq!(FullAddress::Failed.to_string(), "查詢失敗");
        assert_eq!(
            FullAddress::Resolved("桃園市中壢區中正路76號".into()).to_string(),
            "桃園市中壢區中正路76號"
        );
    }

    #[test]
    fn test_row_outcome_from_lookup() {
        assert_eq!(
            RowOutcome::from(LookupOutcome::Found("中壢區".into())),
            RowOutcome::Found("中壢區".into())
        );
        assert_eq!(RowOutcome::from(LookupOutcome::NotFound), RowOutcome::NotFound);
        assert_eq!(RowOutcome::from(LookupOutcome::TimedOut), RowOutcome::NotFound);
    }
}
