use thiserror::Error;

/// Why a [`crate::PasteEntry`] could not be built or read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PasteError {
    /// A required field was absent or `null`
    #[error("paste entry is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("paste entry has an empty hash")]
    EmptyHash,

    /// The document was not valid JSON or a field had the wrong type
    #[error("malformed paste entry: {0}")]
    Malformed(String),

    #[error("invalid creation date: {0}")]
    InvalidDate(String),
}

/// Errors surfaced by a [`crate::PasteSource`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("paste not found: {0}")]
    NotFound(String),

    /// Transport or backend failure; the caller may retry
    #[error("paste source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Malformed(#[from] PasteError),
}
