//! 外部コマンドによる查詢
//!
//! コマンドの標準出力（前後空白除去）を結果とする。
//! - 空出力・「找不到結果」→ 該当なし
//! - 終了コード非0・起動失敗 → エラー
//! - タイムアウト → `TimedOut`（該当なし扱い）

use super::{AddressLookup, LookupOutcome};
use crate::config::Config;
use crate::error::{AddressFinderError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// 查詢コマンドに渡すURLの環境変数
pub const LOOKUP_URL_ENV: &str = "ADDRESS_LOOKUP_URL";

/// 查詢スクリプトが該当なしの場合に出力する文字列
pub const NOT_FOUND_TEXT: &str = "找不到結果";

const QUERY_PLACEHOLDER: &str = "{query}";

pub struct CommandLookup {
    program: String,
    args: Vec<String>,
    url: String,
    timeout: Duration,
}

impl CommandLookup {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let program = config.get_lookup_command()?;
        Ok(Self::new(
            program,
            config.lookup_args.clone(),
            config.lookup_url.clone(),
            Duration::from_secs(config.lookup_timeout_seconds),
        ))
    }

    /// 引数の `{query}` を置換する（なければ末尾に追加）
    pub fn build_args(&self, query: &str) -> Vec<String> {
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(QUERY_PLACEHOLDER, query))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(QUERY_PLACEHOLDER)) {
            args.push(query.to_string());
        }
        args
    }

    fn command(&self, query: &str) -> Command {
        // Windowsではcmd /c経由
        #[cfg(windows)]
        let mut command = {
            let mut command = Command::new("cmd");
            command.arg("/c").arg(&self.program);
            command
        };

        #[cfg(not(windows))]
        let mut command = Command::new(&self.program);

        command
            .args(self.build_args(query))
            .env(LOOKUP_URL_ENV, &self.url)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        command
    }
}

/// コマンド出力を查詢結果に変換する
pub fn parse_response(stdout: &str) -> LookupOutcome {
    let text = stdout.trim();
    if text.is_empty() || text == NOT_FOUND_TEXT {
        LookupOutcome::NotFound
    } else {
        LookupOutcome::Found(text.to_string())
    }
}

impl AddressLookup for CommandLookup {
    async fn lookup(&mut self, query: &str) -> Result<LookupOutcome> {
        let mut command = self.command(query);
        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(output) => output.map_err(|e| {
                let message = format!("查詢コマンド実行エラー ({}): {}", self.program, e);
                AddressFinderError::Lookup(message)
            })?,
            Err(_) => return Ok(LookupOutcome::TimedOut),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AddressFinderError::Lookup(format!(
                "查詢コマンド失敗 (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(parse_response(&String::from_utf8_lossy(&output.stdout)))
    }
}
