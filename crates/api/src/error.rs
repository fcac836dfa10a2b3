#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response")]
    InvalidResponse,
}
