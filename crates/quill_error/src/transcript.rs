//! Transcript precondition error types.

/// Specific error conditions for transcript operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TranscriptErrorKind {
    /// The channel cannot carry text messages.
    #[display("Provided channel must be text-based, received {} ({})", kind, channel_id)]
    NotTextBased {
        /// Channel identifier
        channel_id: String,
        /// Channel kind that was rejected
        kind: String,
    },
    /// An option value is out of range or malformed.
    #[display("Invalid option: {}", _0)]
    InvalidOption(String),
}

/// Error type for transcript operations.
///
/// # Examples
///
/// ```
/// use quill_error::{TranscriptError, TranscriptErrorKind};
///
/// let err = TranscriptError::new(TranscriptErrorKind::NotTextBased {
///     channel_id: "1".to_string(),
///     kind: "guild_voice".to_string(),
/// });
/// assert!(format!("{}", err).contains("text-based"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transcript Error: {} at line {} in {}", kind, line, file)]
pub struct TranscriptError {
    /// The specific error condition
    pub kind: TranscriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TranscriptError {
    /// Create a new TranscriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TranscriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
