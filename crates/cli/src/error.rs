use shortform::ShortFormError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the identifiers file: {0}")]
    IdsFileRead(#[from] std::io::Error),

    #[error("{0}")]
    ShortForm(#[from] ShortFormError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid assignment '{0}' (expected KEY=VALUE)")]
    InvalidAssignment(String),

    #[error("Unknown identifier: '{0}'")]
    UnknownIdentifier(String),
}
