//! Wire format
//!
//! Binary encoding/decoding of typed columns. All integers are big-endian.
//!
//! ```text
//! message := column*                    (format-vector order)
//! column  := kind:u8 rows:i32 element{rows}
//! string  := len:i32 utf8{len}           (kind 0x01)
//! int     := i32                         (kind 0x02)
//! ```
//!
//! Every column repeats the row count so a reader can check the shape
//! without trusting the format vector alone. All columns of one message
//! must agree on it.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::column::{Column, DecodedColumns};
use super::error::{DecodeError, EncodeError};
use super::format::{FormatVector, TypeTag};

/// Size of a column header (kind byte + row count).
const COLUMN_HEADER_LEN: usize = 1 + 4;

/// Size of a string length prefix or an int element.
const WORD_LEN: usize = 4;

/// Read cursor over a message body that tracks the absolute offset for errors.
struct Reader<'a> {
    buf: &'a [u8],
    start_len: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            start_len: buf.len(),
        }
    }

    fn offset(&self) -> usize {
        self.start_len - self.buf.remaining()
    }

    fn require(&self, len: usize) -> Result<(), DecodeError> {
        let available = self.buf.remaining();
        if available < len {
            return Err(DecodeError::TruncatedInput {
                offset: self.offset(),
                needed: len - available,
            });
        }
        Ok(())
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        self.require(1)?;
        Ok(self.buf.get_u8())
    }

    fn i32(&mut self) -> Result<i32, DecodeError> {
        self.require(WORD_LEN)?;
        Ok(self.buf.get_i32())
    }

    /// Reads a length prefix, rejecting negative values.
    fn length(&mut self, reason: &'static str) -> Result<usize, DecodeError> {
        let offset = self.offset();
        let value = self.i32()?;
        usize::try_from(value).map_err(|_| DecodeError::MalformedLength {
            offset,
            value: i64::from(value),
            reason,
        })
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.require(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Upper bound on elements that could still fit, used to cap allocations.
    fn max_elements(&self, min_element_len: usize) -> usize {
        self.buf.remaining() / min_element_len
    }
}

/// Decodes a message into columns shaped by `format`.
///
/// Columns are read in declared order. The row count comes from the stream,
/// so the same format vector accepts listings of any size; every column must
/// carry the same row count as the first.
pub fn decode(format: &FormatVector, message: &[u8]) -> Result<DecodedColumns, DecodeError> {
    let mut reader = Reader::new(message);
    let mut columns =
        Vec::with_capacity(format.column_count().min(message.len() / COLUMN_HEADER_LEN));
    let mut rows: Option<usize> = None;

    for (index, tag) in format.column_tags().enumerate() {
        let found = reader.u8()?;
        if found != tag.wire_tag() {
            return Err(DecodeError::TypeMismatch {
                column: index,
                expected: tag,
                found,
            });
        }

        let rows_offset = reader.offset();
        let column_rows = reader.length("negative row count")?;
        match rows {
            None => rows = Some(column_rows),
            Some(expected) if expected != column_rows => {
                return Err(DecodeError::MalformedLength {
                    offset: rows_offset,
                    value: column_rows as i64,
                    reason: "row count differs from the first column",
                });
            }
            Some(_) => {}
        }

        let column = match tag {
            TypeTag::StringVector => decode_strings(&mut reader, index, column_rows)?,
            TypeTag::IntVector => decode_ints(&mut reader, column_rows)?,
        };
        columns.push(column);
    }

    let trailing = reader.buf.remaining();
    if trailing > 0 {
        return Err(DecodeError::TrailingBytes(trailing));
    }

    Ok(DecodedColumns::from_checked(columns, rows.unwrap_or(0)))
}

fn decode_strings(reader: &mut Reader<'_>, column: usize, rows: usize) -> Result<Column, DecodeError> {
    let mut values = Vec::with_capacity(rows.min(reader.max_elements(WORD_LEN)));
    for row in 0..rows {
        let len = reader.length("negative string length")?;
        let raw = reader.bytes(len)?;
        let s = std::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8 { column, row })?;
        values.push(s.to_owned());
    }
    Ok(Column::Strings(values))
}

fn decode_ints(reader: &mut Reader<'_>, rows: usize) -> Result<Column, DecodeError> {
    let mut values = Vec::with_capacity(rows.min(reader.max_elements(WORD_LEN)));
    for _ in 0..rows {
        values.push(reader.i32()?);
    }
    Ok(Column::Ints(values))
}

/// Encodes columns into a message shaped by `format`.
///
/// Mirror of [`decode`]: `decode(fv, &encode(fv, &c)?) == Ok(c)`.
pub fn encode(format: &FormatVector, columns: &DecodedColumns) -> Result<Bytes, EncodeError> {
    columns.conforms_to(format)?;

    let mut out = BytesMut::with_capacity(encoded_len_hint(columns));
    for column in columns.columns() {
        out.put_u8(column.kind().wire_tag());
        out.put_i32(length_prefix("row count", column.len())?);

        match column {
            Column::Strings(values) => {
                for s in values {
                    out.put_i32(length_prefix("string", s.len())?);
                    out.put_slice(s.as_bytes());
                }
            }
            Column::Ints(values) => {
                for &v in values {
                    out.put_i32(v);
                }
            }
        }
    }

    Ok(out.freeze())
}

fn length_prefix(what: &'static str, len: usize) -> Result<i32, EncodeError> {
    i32::try_from(len).map_err(|_| EncodeError::TooLong { what, len })
}

fn encoded_len_hint(columns: &DecodedColumns) -> usize {
    columns
        .columns()
        .iter()
        .map(|column| {
            COLUMN_HEADER_LEN
                + match column {
                    Column::Strings(values) => values.iter().map(|s| WORD_LEN + s.len()).sum(),
                    Column::Ints(values) => values.len() * WORD_LEN,
                }
        })
        .sum()
}
