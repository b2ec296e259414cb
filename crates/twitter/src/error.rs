use thiserror::Error;

/// Errors that can occur while running the preprocessing pipeline.
///
/// The individual transforms never fail; only configuration and record
/// validation can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("preprocessed post requires a non-empty post_id")]
    MissingPostId,
}
