//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Key binding errors (conflicts, invalid configurations).
    /// The user can pick another key.
    Input,

    /// Structured data from the server could not be decoded or applied.
    /// The next push may succeed.
    Protocol,
}

impl ErrorCategory {
    /// Returns true if a later attempt with fresh data may succeed without
    /// user action.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Protocol)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Protocol => "protocol",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Input => "Choose a different key or reset the key configuration",
            ErrorCategory::Protocol => "Wait for the next update from the player",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_transient() {
        assert!(ErrorCategory::Protocol.is_transient());
        assert!(!ErrorCategory::Input.is_transient());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Input), "input");
        assert_eq!(ErrorCategory::Protocol.as_str(), "protocol");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Input.recovery_hint().contains("key"));
        assert!(ErrorCategory::Protocol.recovery_hint().contains("update"));
    }
}
