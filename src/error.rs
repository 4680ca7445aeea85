use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordSolverError {
    #[error("config error: {0}")]
    Config(String),

    #[error("API key is not set. Export OPENAI_API_KEY or run `wordsolver config --set-api-key YOUR_KEY`")]
    MissingApiKey,

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("no images found: {0}")]
    NoImagesFound(String),

    #[error("not an image file: {0}")]
    NotAnImage(String),

    #[error("failed to read image: {0}")]
    ImageLoad(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI error: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, WordSolverError>;
