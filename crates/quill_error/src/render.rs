//! Renderer error types.

/// Error raised by a transcript renderer.
///
/// Renderer failures are fatal to the transcript operation and are
/// propagated to the caller unchanged.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", message, line, file)]
pub struct RenderError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_error::RenderError;
    ///
    /// let err = RenderError::new("output too large");
    /// assert_eq!(err.message, "output too large");
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
