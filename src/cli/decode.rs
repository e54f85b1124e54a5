//! `--decode`: inspect a captured listing message.

use std::fs;
use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};

use crate::models::{ListingModel, ListingSnapshot};
use crate::traits::StructuredData;

/// Decodes the listing message stored in `path`.
pub fn decode_listing_file(path: &Path) -> Result<ListingSnapshot> {
    let message =
        fs::read(path).wrap_err(format!("Failed to read listing message from {:?}", path))?;

    let model = ListingModel::new();
    model
        .apply_encoded(&message)
        .wrap_err(format!("Failed to decode listing message in {:?}", path))?;

    Ok(ListingSnapshot::clone(&model.snapshot()))
}

/// Handle `--decode`: prints one row per line.
pub fn handle_decode_command(path: &Path) -> Result<()> {
    let listing = decode_listing_file(path)?;
    println!("{} playlist(s)", listing.len());
    for (i, entry) in listing.entries().enumerate() {
        let editable = if entry.is_editable() { " [editable]" } else { "" };
        println!("{:>3}  {}  {}{}", i, entry.id, entry.name, editable);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, Column, DecodedColumns};
    use crate::models::LISTING_FORMAT;
    use tempfile::TempDir;

    #[test]
    fn test_decode_listing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listing.bin");
        let columns = DecodedColumns::new(vec![
            Column::Strings(vec!["p1".into(), "p2".into()]),
            Column::Strings(vec!["Rock".into(), "Jazz".into()]),
            Column::Ints(vec![0, 1]),
        ])
        .unwrap();
        fs::write(&path, encode(&LISTING_FORMAT, &columns).unwrap()).unwrap();

        let listing = decode_listing_file(&path).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.entry_name(1), Some("Jazz"));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, [0x02, 0x00, 0x00]).unwrap();
        assert!(decode_listing_file(&path).is_err());
    }

    #[test]
    fn test_decode_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(decode_listing_file(&dir.path().join("nope.bin")).is_err());
    }
}
