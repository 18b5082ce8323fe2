//! Top-level error wrapper types.

use crate::{ConfigError, OutputError, RenderError, ServiceError, TranscriptError};

/// Every error condition a Quill operation can surface.
///
/// # Examples
///
/// ```
/// use quill_error::{QuillError, RenderError};
///
/// let render_err = RenderError::new("renderer crashed");
/// let err: QuillError = render_err.into();
/// assert!(format!("{}", err).contains("Render Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QuillErrorKind {
    /// Precondition violated before any work was done
    #[from(TranscriptError)]
    Transcript(TranscriptError),
    /// Remote chat service failure
    #[from(ServiceError)]
    Service(ServiceError),
    /// Renderer failure
    #[from(RenderError)]
    Render(RenderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Writing the transcript failed
    #[from(OutputError)]
    Output(OutputError),
}

/// Quill error with kind discrimination.
///
/// # Examples
///
/// ```
/// use quill_error::{ConfigError, QuillErrorKind, QuillResult};
///
/// fn might_fail() -> QuillResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), QuillErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Quill Error: {}", _0)]
pub struct QuillError(Box<QuillErrorKind>);

impl QuillError {
    /// Create a new error from a kind.
    pub fn new(kind: QuillErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuillErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to QuillErrorKind
impl<T> From<T> for QuillError
where
    T: Into<QuillErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Quill operations.
pub type QuillResult<T> = std::result::Result<T, QuillError>;
