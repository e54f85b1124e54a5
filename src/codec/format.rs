//! Format vectors: the declared shape of a structured message.

use std::borrow::Cow;
use std::fmt;

use super::error::DecodeError;

/// Kind of values held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Length-prefixed UTF-8 strings
    StringVector,
    /// Fixed-width signed 32-bit integers
    IntVector,
}

impl TypeTag {
    /// Wire byte preceding every column of this kind.
    pub const fn wire_tag(self) -> u8 {
        match self {
            TypeTag::StringVector => 0x01,
            TypeTag::IntVector => 0x02,
        }
    }

    /// Parses a wire byte.
    pub fn from_wire(tag: u8) -> Option<TypeTag> {
        match tag {
            0x01 => Some(TypeTag::StringVector),
            0x02 => Some(TypeTag::IntVector),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::StringVector => "string-vector",
            TypeTag::IntVector => "int-vector",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(tag, count)` pair of a format vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry {
    pub tag: TypeTag,
    pub count: usize,
}

impl FormatEntry {
    pub const fn new(tag: TypeTag, count: usize) -> Self {
        Self { tag, count }
    }
}

/// Ordered list of `(tag, count)` pairs describing how a message splits into columns.
///
/// Declared once per entity type, usually as a `const`:
///
/// ```
/// use playctl::codec::{FormatEntry, FormatVector, TypeTag};
///
/// const ENTRIES: &[FormatEntry] = &[
///     FormatEntry::new(TypeTag::StringVector, 1),
///     FormatEntry::new(TypeTag::IntVector, 1),
/// ];
/// const PAIRS: FormatVector = FormatVector::from_static(ENTRIES);
/// assert_eq!(PAIRS.column_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatVector {
    entries: Cow<'static, [FormatEntry]>,
}

impl FormatVector {
    pub const fn from_static(entries: &'static [FormatEntry]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn new(entries: Vec<FormatEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    /// Builds a format vector from its flat integer form `[tag, count, tag, count, ...]`.
    pub fn from_raw(raw: &[i32]) -> Result<Self, DecodeError> {
        if raw.len() % 2 != 0 {
            return Err(DecodeError::MalformedLength {
                offset: raw.len(),
                value: raw.len() as i64,
                reason: "format vector has an unpaired entry",
            });
        }

        let entries = raw
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                let tag = u8::try_from(pair[0])
                    .ok()
                    .and_then(TypeTag::from_wire)
                    .ok_or(DecodeError::UnknownTypeTag(pair[0]))?;
                let count =
                    usize::try_from(pair[1]).map_err(|_| DecodeError::MalformedLength {
                        offset: i * 2 + 1,
                        value: i64::from(pair[1]),
                        reason: "negative column count",
                    })?;
                Ok(FormatEntry::new(tag, count))
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[FormatEntry] {
        &self.entries
    }

    /// Total number of columns across all entries, saturating at `usize::MAX`.
    pub fn column_count(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |total, e| total.saturating_add(e.count))
    }

    /// Declared kind of every column, in column order.
    pub fn column_tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.tag).take(e.count))
    }
}
