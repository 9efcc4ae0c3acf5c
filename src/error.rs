use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("出力先が既に存在します（上書きは --force）: {0}")]
    OutputExists(String),

    #[error("Excel読み込みエラー: {0}")]
    Excel(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] material_lookup_common::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
