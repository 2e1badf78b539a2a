//! Animation errors.

/// Result alias for typeanim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or animating text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad caller input: an unknown speed or mode, or text that is not a string.
    #[error("{0}")]
    InvalidInput(String),

    /// Writing to the output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether this is a validation error rather than an I/O failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Decode raw input bytes into animation text.
///
/// Fails with `InvalidInput` when the bytes are not valid UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        Error::invalid_input(format!(
            "text must be a string (invalid UTF-8 at byte {})",
            e.utf8_error().valid_up_to()
        ))
    })
}
