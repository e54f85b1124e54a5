//! Decoded column types.

use super::error::ShapeError;
use super::format::{FormatVector, TypeTag};

/// A homogeneous column of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Strings(Vec<String>),
    Ints(Vec<i32>),
}

impl Column {
    pub fn kind(&self) -> TypeTag {
        match self {
            Column::Strings(_) => TypeTag::StringVector,
            Column::Ints(_) => TypeTag::IntVector,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Strings(v) => v.len(),
            Column::Ints(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Column::Strings(v) => Some(v),
            Column::Ints(_) => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i32]> {
        match self {
            Column::Ints(v) => Some(v),
            Column::Strings(_) => None,
        }
    }

    /// An empty column of the given kind.
    pub fn empty(kind: TypeTag) -> Self {
        match kind {
            TypeTag::StringVector => Column::Strings(Vec::new()),
            TypeTag::IntVector => Column::Ints(Vec::new()),
        }
    }
}

impl From<Vec<String>> for Column {
    fn from(v: Vec<String>) -> Self {
        Column::Strings(v)
    }
}

impl From<Vec<i32>> for Column {
    fn from(v: Vec<i32>) -> Self {
        Column::Ints(v)
    }
}

/// Positionally aligned columns sharing one row count.
///
/// Column order is the order of the format vector that produced (or will
/// encode) them. The codec has no field names; consumers map indices to
/// meaning themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedColumns {
    columns: Vec<Column>,
    rows: usize,
}

impl DecodedColumns {
    /// Groups columns, checking they all have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self, ShapeError> {
        let rows = columns.first().map_or(0, Column::len);
        if let Some((column, bad)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(ShapeError::RowCount {
                column,
                expected: rows,
                actual: bad.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Empty columns shaped by `format`.
    pub fn empty_for(format: &FormatVector) -> Self {
        Self {
            columns: format.column_tags().map(Column::empty).collect(),
            rows: 0,
        }
    }

    // Decoder already enforced equal lengths.
    pub(super) fn from_checked(columns: Vec<Column>, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Number of rows (entities) shared by every column.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Checks the columns against `format`: column count and kinds.
    pub fn conforms_to(&self, format: &FormatVector) -> Result<(), ShapeError> {
        let expected = format.column_count();
        if self.columns.len() != expected {
            return Err(ShapeError::ColumnCount {
                expected,
                actual: self.columns.len(),
            });
        }

        for (column, (tag, col)) in format.column_tags().zip(&self.columns).enumerate() {
            if col.kind() != tag {
                return Err(ShapeError::ColumnKind {
                    column,
                    expected: tag,
                    actual: col.kind(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatEntry;

    fn strings(v: &[&str]) -> Column {
        Column::Strings(v.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let err = DecodedColumns::new(vec![strings(&["a", "b"]), Column::Ints(vec![1])]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RowCount {
                column: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_empty_for_format() {
        let fv = FormatVector::new(vec![
            FormatEntry::new(TypeTag::StringVector, 2),
            FormatEntry::new(TypeTag::IntVector, 1),
        ]);
        let cols = DecodedColumns::empty_for(&fv);
        assert_eq!(cols.row_count(), 0);
        assert_eq!(cols.column_count(), 3);
        assert!(cols.conforms_to(&fv).is_ok());
    }

    #[test]
    fn test_conforms_to_detects_kind() {
        let fv = FormatVector::new(vec![FormatEntry::new(TypeTag::IntVector, 1)]);
        let cols = DecodedColumns::new(vec![strings(&["x"])]).unwrap();
        assert_eq!(
            cols.conforms_to(&fv),
            Err(ShapeError::ColumnKind {
                column: 0,
                expected: TypeTag::IntVector,
                actual: TypeTag::StringVector
            })
        );
    }

    #[test]
    fn test_conforms_to_detects_count() {
        let fv = FormatVector::new(vec![FormatEntry::new(TypeTag::IntVector, 2)]);
        let cols = DecodedColumns::new(vec![Column::Ints(vec![1])]).unwrap();
        assert!(matches!(
            cols.conforms_to(&fv),
            Err(ShapeError::ColumnCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_column_accessors() {
        let col = Column::from(vec![3, 4]);
        assert_eq!(col.kind(), TypeTag::IntVector);
        assert_eq!(col.as_ints(), Some(&[3, 4][..]));
        assert_eq!(col.as_strings(), None);
        assert!(!col.is_empty());
    }
}
