//! Output error types.

/// Error raised while writing a transcript to its destination.
///
/// Covers local files and standard output; upload failures are service
/// errors.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at line {} in {}", message, line, file)]
pub struct OutputError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl OutputError {
    /// Create a new OutputError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_error::OutputError;
    ///
    /// let err = OutputError::new("permission denied");
    /// assert_eq!(err.message, "permission denied");
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
