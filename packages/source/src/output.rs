//! CSV output.
//!
//! The file starts with a UTF-8 byte-order mark so spreadsheet tools pick
//! the right encoding for accented names.

use std::io::Write;
use std::path::Path;

use squad_roster_models::{CSV_FIELDS, PlayerRecord};

use crate::SourceError;

/// UTF-8 byte-order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes a BOM, the header row, and one row per record to `writer`.
///
/// The header row is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`SourceError`] if writing fails.
pub fn write_csv<W: Write>(mut writer: W, records: &[PlayerRecord]) -> Result<(), SourceError> {
    writer.write_all(BOM)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_FIELDS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes `records` to the file at `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`SourceError`] if the directory or file cannot be created or
/// writing fails.
pub fn write_csv_file(path: &Path, records: &[PlayerRecord]) -> Result<(), SourceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), records)?;

    log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlayerRecord {
        PlayerRecord {
            name: "Éder Militão".to_owned(),
            team: "Real Madrid".to_owned(),
            country: "BRA".to_owned(),
            position: "DF".to_owned(),
            league: "LaLiga".to_owned(),
            shirt_number: "3".to_owned(),
        }
    }

    #[test]
    fn writes_bom_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[record()]).unwrap();

        assert!(buf.starts_with(BOM));
        let text = String::from_utf8(buf[BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "Name,Team,Country,Position,League,Shirt Number\n\
             Éder Militão,Real Madrid,BRA,DF,LaLiga,3\n"
        );
    }

    #[test]
    fn empty_output_still_has_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();

        let text = String::from_utf8(buf[BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "Name,Team,Country,Position,League,Shirt Number\n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("squad_roster_output_{}", std::process::id()));
        let path = dir.join("nested").join("squads.csv");

        write_csv_file(&path, &[record()]).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(bytes.starts_with(BOM));
    }
}
