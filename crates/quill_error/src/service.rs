//! Remote chat service error types.

/// Specific error conditions raised while talking to the remote chat service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServiceErrorKind {
    /// A page of message history could not be fetched.
    #[display("Failed to fetch messages from channel {}: {}", channel_id, reason)]
    FetchMessages {
        /// Channel being paged
        channel_id: String,
        /// Underlying failure
        reason: String,
    },
    /// An entity lookup failed.
    #[display("Failed to look up {} {}: {}", entity, id, reason)]
    Lookup {
        /// Entity kind ("user", "role", "channel")
        entity: String,
        /// Requested identifier
        id: String,
        /// Underlying failure
        reason: String,
    },
    /// The service answered but the entity does not exist.
    #[display("{} {} not found", entity, id)]
    NotFound {
        /// Entity kind ("user", "role", "channel")
        entity: String,
        /// Requested identifier
        id: String,
    },
    /// A platform model could not be converted into a Quill model.
    #[display("Failed to convert {}: {}", entity, reason)]
    Conversion {
        /// Entity kind being converted
        entity: String,
        /// What was missing or malformed
        reason: String,
    },
    /// A message or file could not be sent.
    #[display("Failed to send to channel {}: {}", channel_id, reason)]
    Send {
        /// Destination channel
        channel_id: String,
        /// Underlying failure
        reason: String,
    },
}

/// Remote chat service error with location tracking.
///
/// # Examples
///
/// ```
/// use quill_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::NotFound {
///     entity: "role".to_string(),
///     id: "42".to_string(),
/// });
/// assert!(format!("{}", err).contains("role 42 not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The specific error condition
    pub kind: ServiceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new ServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
