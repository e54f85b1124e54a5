//! Typed columnar codec for structured server data.
//!
//! A [`FormatVector`] declares how a flat message splits into typed
//! columns. [`decode`] turns a message body into [`DecodedColumns`];
//! [`encode`] is its mirror. Both are pure functions with no shared state.
//!
//! # Example
//!
//! ```
//! use playctl::codec::{decode, encode, Column, DecodedColumns, FormatEntry, FormatVector, TypeTag};
//!
//! let format = FormatVector::new(vec![
//!     FormatEntry::new(TypeTag::StringVector, 1),
//!     FormatEntry::new(TypeTag::IntVector, 1),
//! ]);
//! let columns = DecodedColumns::new(vec![
//!     Column::Strings(vec!["a".into(), "b".into()]),
//!     Column::Ints(vec![1, 2]),
//! ])
//! .unwrap();
//!
//! let message = encode(&format, &columns).unwrap();
//! assert_eq!(decode(&format, &message).unwrap(), columns);
//! ```

pub mod column;
pub mod error;
pub mod format;
pub mod wire;

pub use column::{Column, DecodedColumns};
pub use error::{DecodeError, EncodeError, ShapeError};
pub use format::{FormatEntry, FormatVector, TypeTag};
pub use wire::{decode, encode};
