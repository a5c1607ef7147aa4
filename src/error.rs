use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecetasError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("レシピが見つかりません: id={0}")]
    RecipeNotFound(u32),

    #[error("カタログファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Core(#[from] recetas_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, RecetasError>;
