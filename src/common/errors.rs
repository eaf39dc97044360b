use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Error categories shared across the whole engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown item, share, comment or account id
    NotFound,
    /// Parent reference does not resolve to a usable folder
    InvalidParent,
    /// A move would make an item its own ancestor
    CycleDetected,
    /// An ancestor referenced by `parent_id` no longer exists
    BrokenChain,
    /// Lifecycle transition attempted from the wrong state
    NotTrashed,
    /// Input validation failed (empty name, empty comment, bad permission)
    InvalidInput,
    /// Share grantee could not be resolved to an account
    UnknownGrantee,
    /// Operation not applicable to this item kind
    UnsupportedTarget,
    /// Caller lacks ownership or a sufficient share level
    AccessDenied,
    /// Internal failure
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ErrorKind::NotFound => write!(f, "Not Found"),
            ErrorKind::InvalidParent => write!(f, "Invalid Parent"),
            ErrorKind::CycleDetected => write!(f, "Cycle Detected"),
            ErrorKind::BrokenChain => write!(f, "Broken Chain"),
            ErrorKind::NotTrashed => write!(f, "Not Trashed"),
            ErrorKind::InvalidInput => write!(f, "Invalid Input"),
            ErrorKind::UnknownGrantee => write!(f, "Unknown Grantee"),
            ErrorKind::UnsupportedTarget => write!(f, "Unsupported Target"),
            ErrorKind::AccessDenied => write!(f, "Access Denied"),
            ErrorKind::InternalError => write!(f, "Internal Error"),
        }
    }
}

/// Domain error carrying the affected entity and a source chain
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct DomainError {
    /// Error category
    pub kind: ErrorKind,
    /// Entity type affected (e.g. "Item", "Share")
    pub entity_type: &'static str,
    /// Entity identifier when available
    pub entity_id: Option<String>,
    /// Descriptive message
    pub message: String,
    /// Underlying cause, if any
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type used by repositories, ports and services
pub type Result<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub fn new<S: Into<String>>(kind: ErrorKind, entity_type: &'static str, message: S) -> Self {
        Self {
            kind,
            entity_type,
            entity_id: None,
            message: message.into(),
            source: None,
        }
    }

    pub fn not_found<S: Into<String>>(entity_type: &'static str, entity_id: S) -> Self {
        let id = entity_id.into();
        Self {
            kind: ErrorKind::NotFound,
            entity_type,
            entity_id: Some(id.clone()),
            message: format!("{} not found: {}", entity_type, id),
            source: None,
        }
    }

    pub fn invalid_parent<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::InvalidParent, "Item", message)
    }

    pub fn cycle_detected<S: Into<String>>(entity_id: S) -> Self {
        let id = entity_id.into();
        Self {
            kind: ErrorKind::CycleDetected,
            entity_type: "Item",
            entity_id: Some(id.clone()),
            message: format!("Moving item {} under its own descendant", id),
            source: None,
        }
    }

    pub fn broken_chain<S: Into<String>>(entity_id: S) -> Self {
        let id = entity_id.into();
        Self {
            kind: ErrorKind::BrokenChain,
            entity_type: "Item",
            entity_id: Some(id.clone()),
            message: format!("Ancestor {} no longer exists", id),
            source: None,
        }
    }

    pub fn not_trashed<S: Into<String>>(entity_id: S) -> Self {
        let id = entity_id.into();
        Self {
            kind: ErrorKind::NotTrashed,
            entity_type: "Item",
            entity_id: Some(id.clone()),
            message: format!("Item {} is not in the trash", id),
            source: None,
        }
    }

    pub fn validation_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InvalidInput, entity_type, message)
    }

    pub fn unknown_grantee<S: Into<String>>(identifier: S) -> Self {
        let id = identifier.into();
        Self {
            kind: ErrorKind::UnknownGrantee,
            entity_type: "Share",
            entity_id: None,
            message: format!("No account matches grantee: {}", id),
            source: None,
        }
    }

    pub fn unsupported_target<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::UnsupportedTarget, entity_type, message)
    }

    pub fn access_denied<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::AccessDenied, entity_type, message)
    }

    pub fn internal_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InternalError, entity_type, message)
    }

    pub fn with_id<S: Into<String>>(mut self, entity_id: S) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn with_source<E: StdError + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_id() {
        let err = DomainError::not_found("Item", "abc");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.entity_id.as_deref(), Some("abc"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn validation_error_has_invalid_input_kind() {
        let err = DomainError::validation_error("Comment", "Comment text cannot be empty");
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert_eq!(err.entity_type, "Comment");
    }
}
