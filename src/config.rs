use crate::error::{AddressFinderError, Result};
use address_common::CITY_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 查詢コマンドを上書きする環境変数
pub const LOOKUP_COMMAND_ENV: &str = "ADDRESS_LOOKUP_COMMAND";

/// 門牌查詢サイト（桃園市）
pub const DEFAULT_LOOKUP_URL: &str = "https://addressrs.moi.gov.tw/address/index.cfm?city_id=68000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 查詢コマンド（ヘッドレスブラウザを操作するスクリプト）
    pub lookup_command: Option<String>,
    /// 查詢コマンドの引数（`{query}` を住所に置換）
    pub lookup_args: Vec<String>,
    pub lookup_url: String,
    pub lookup_timeout_seconds: u64,
    /// 1件ごとの待機時間
    pub query_interval_seconds: u64,
    pub city_name: String,
    pub exception_rules_path: PathBuf,
    /// コンソール出力で住所を揃える幅
    pub pad_width: usize,
    pub open_after_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_command: None,
            lookup_args: vec!["{query}".into()],
            lookup_url: DEFAULT_LOOKUP_URL.into(),
            lookup_timeout_seconds: 20,
            query_interval_seconds: 5,
            city_name: CITY_NAME.into(),
            exception_rules_path: PathBuf::from("exception_rules.json"),
            pad_width: 50,
            open_after_run: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AddressFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("taoyuan-address").join("config.json"))
    }

    pub fn get_lookup_command(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(command) = std::env::var(LOOKUP_COMMAND_ENV) {
            if !command.trim().is_empty() {
                return Ok(command);
            }
        }

        self.lookup_command
            .clone()
            .filter(|c| !c.trim().is_empty())
            .ok_or(AddressFinderError::MissingLookupCommand)
    }

    /// 查詢コマンドを設定して保存する
    ///
    /// `command` の先頭がプログラム、残りが引数。
    pub fn set_lookup_command(&mut self, command: Vec<String>) -> Result<()> {
        let mut parts = command.into_iter();
        let program = parts
            .next()
            .ok_or_else(|| AddressFinderError::Config("查詢コマンドが空です".into()))?;
        let args: Vec<String> = parts.collect();

        self.lookup_command = Some(program);
        self.lookup_args = if args.is_empty() { vec!["{query}".into()] } else { args };
        self.save()
    }
}
