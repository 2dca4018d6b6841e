use thiserror::Error;

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to spawn process '{command}': {error}")]
    SpawnError { command: String, error: String },
    #[error("Empty command line for '{purpose}'")]
    EmptyCommand { purpose: &'static str },
}

pub type SystemResult<T> = Result<T, SystemError>;
