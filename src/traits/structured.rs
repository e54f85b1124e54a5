//! Entities exchanged as typed columns.

use bytes::Bytes;
use thiserror::Error;

use crate::codec::{self, DecodeError, DecodedColumns, EncodeError, FormatVector, ShapeError};

/// Failure applying an encoded message to an entity. The entity is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("unexpected shape: {0}")]
    Shape(#[from] ShapeError),
}

/// An entity whose state travels as columns shaped by a fixed format vector.
///
/// Implementors replace their state wholesale in [`apply_columns`](Self::apply_columns);
/// there is no incremental update.
pub trait StructuredData: Send + Sync {
    /// The format vector this entity is declared with.
    fn format_vector(&self) -> &FormatVector;

    /// Replaces the entity's state with `columns`.
    fn apply_columns(&self, columns: DecodedColumns) -> Result<(), ShapeError>;

    /// Current state as columns, for sending back to the server.
    fn to_columns(&self) -> DecodedColumns;

    /// Decodes `message` and applies it. Nothing changes on failure.
    fn apply_encoded(&self, message: &[u8]) -> Result<(), ApplyError> {
        let columns = codec::decode(self.format_vector(), message)?;
        self.apply_columns(columns)?;
        Ok(())
    }

    /// Encodes the current state.
    fn encode_current(&self) -> Result<Bytes, EncodeError> {
        codec::encode(self.format_vector(), &self.to_columns())
    }
}
