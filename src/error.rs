use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("查詢コマンドが設定されていません。`address-finder config --set-lookup-command <CMD>` で設定してください")]
    MissingLookupCommand,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Excel読み込みエラー: {0}")]
    WorkbookRead(String),

    #[error("Excel書き込みエラー: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("查詢エラー: {0}")]
    Lookup(String),

    #[error("ファイル起動エラー: {0}")]
    Launch(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] address_common::Error),
}

pub type Result<T> = std::result::Result<T, AddressFinderError>;
