use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "address-finder")]
#[command(about = "桃園市門牌地址の一括查詢・正規化ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Excelの住所を一括查詢して結果を書き込む
    Run {
        /// 住所Excelファイル（B欄が入力、2行目から）
        #[arg(default_value = "address_data.xlsx")]
        file: PathBuf,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 例外里ルールJSON
        #[arg(long)]
        rules: Option<PathBuf>,

        /// 查詢間隔（秒）
        #[arg(long)]
        interval: Option<u64>,

        /// 上書き前のバックアップを作らない
        #[arg(long)]
        no_backup: bool,

        /// 完了後にファイルを開かない
        #[arg(long)]
        no_open: bool,
    },

    /// 対話的に1件ずつ查詢
    Single {
        /// 例外里ルールJSON
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// 查詢せずに簡略化・整形結果を表示
    Simplify {
        /// 住所
        #[arg(required = true)]
        address: String,

        /// 例外里ルールJSON
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 查詢コマンドを設定（`{query}` が住所に置換される）
        #[arg(long, num_args = 1.., allow_hyphen_values = true)]
        set_lookup_command: Option<Vec<String>>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
