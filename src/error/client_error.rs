//! The unified error type.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::codec::{DecodeError, EncodeError, ShapeError};
use crate::input::{BindError, ValidationError};
use crate::traits::ApplyError;

/// Type alias for Results using [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

/// Any error raised by the client core.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("invalid key configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl From<ApplyError> for ClientError {
    fn from(err: ApplyError) -> Self {
        match err {
            ApplyError::Decode(e) => ClientError::Decode(e),
            ApplyError::Shape(e) => ClientError::Shape(e),
        }
    }
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Bind(_) | ClientError::Validation(_) => ErrorCategory::Input,
            ClientError::Decode(_) | ClientError::Encode(_) | ClientError::Shape(_) => {
                ErrorCategory::Protocol
            }
        }
    }

    /// True when a later server push may succeed without user action.
    pub fn is_transient(&self) -> bool {
        self.category().is_transient()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Bind(_) => "E_KEY_CONFLICT",
            ClientError::Validation(ValidationError::WrongLength { .. }) => "E_KEY_LENGTH",
            ClientError::Validation(ValidationError::DuplicateCode(_)) => "E_KEY_DUPLICATE",
            ClientError::Decode(DecodeError::TruncatedInput { .. }) => "E_DECODE_TRUNCATED",
            ClientError::Decode(DecodeError::TypeMismatch { .. }) => "E_DECODE_TYPE",
            ClientError::Decode(DecodeError::MalformedLength { .. }) => "E_DECODE_LENGTH",
            ClientError::Decode(_) => "E_DECODE",
            ClientError::Encode(_) => "E_ENCODE",
            ClientError::Shape(_) => "E_SHAPE",
        }
    }
}
