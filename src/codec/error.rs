//! Codec error types.

use thiserror::Error;

use super::format::TypeTag;

/// Failure while decoding a message against a format vector.
///
/// Decoding never commits partial results, so every variant means "nothing
/// was produced".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("input truncated at offset {offset}: {needed} more bytes needed")]
    TruncatedInput { offset: usize, needed: usize },

    #[error("type mismatch in column {column}: declared {expected}, wire kind {found:#04x}")]
    TypeMismatch {
        column: usize,
        expected: TypeTag,
        found: u8,
    },

    #[error("malformed length {value} at offset {offset}: {reason}")]
    MalformedLength {
        offset: usize,
        value: i64,
        reason: &'static str,
    },

    #[error("invalid UTF-8 in column {column}, row {row}")]
    InvalidUtf8 { column: usize, row: usize },

    #[error("{0} trailing bytes after the declared shape")]
    TrailingBytes(usize),

    #[error("unknown type tag {0}")]
    UnknownTypeTag(i32),
}

/// Failure while encoding columns against a format vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("{what} of {len} does not fit in a 32-bit length prefix")]
    TooLong { what: &'static str, len: usize },
}

/// Columns that do not match the shape a consumer expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("column {column} is {actual}, expected {expected}")]
    ColumnKind {
        column: usize,
        expected: TypeTag,
        actual: TypeTag,
    },

    #[error("column {column} has {actual} rows, expected {expected}")]
    RowCount {
        column: usize,
        expected: usize,
        actual: usize,
    },
}
