use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmeStatsError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("not a text file: {0}")]
    NotText(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadmeStatsError>;
