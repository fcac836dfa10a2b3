#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Chanarc API error: {0}")]
    Api(#[from] chanarc_api::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid thread reference: {0}")]
    InvalidThread(String),
}
