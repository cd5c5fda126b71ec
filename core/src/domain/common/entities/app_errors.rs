use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("failed to read statistics dataset: {0}")]
    DatasetRead(String),

    #[error("statistics dataset is neither valid CP949 nor valid UTF-8")]
    DatasetDecode,

    #[error("failed to parse statistics dataset: {0}")]
    DatasetParse(String),
}
