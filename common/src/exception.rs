//! 鄰番号を残す例外里の定義
//!
//! `exception_rules.json` の例:
//! ```json
//! { "require_ling": ["高上里"] }
//! ```

use crate::error::Result;
use crate::rules::VILLAGE_TO_NEIGHBORHOOD;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 例外ルール
///
/// 起動時に一度だけ読み込み、以降は参照渡しで使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRules {
    /// 鄰番号を削除しない里の名前
    #[serde(default)]
    pub require_ling: Vec<String>,
}

impl ExceptionRules {
    pub fn new(require_ling: Vec<String>) -> Self {
        Self { require_ling }
    }

    /// JSONファイルから読み込む（ファイルがなければ空のルール）
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json)?;
        Ok(rules)
    }

    /// 住所に含まれる最初の例外里
    pub fn matches(&self, address: &str) -> Option<&str> {
        self.require_ling
            .iter()
            .map(String::as_str)
            .find(|name| !name.is_empty() && address.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.require_ling.is_empty()
    }

    pub fn len(&self) -> usize {
        self.require_ling.len()
    }
}

/// 例外里でなければ「里」〜「鄰」を「里」に置き換える
pub fn remove_neighborhood(address: &str, rules: &ExceptionRules) -> String {
    if rules.matches(address).is_some() {
        return address.to_string();
    }
    VILLAGE_TO_NEIGHBORHOOD.apply(address)
}
