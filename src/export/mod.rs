//! Export module for the expense tracker
//!
//! Provides data export in two formats:
//! - CSV: the expense list (spreadsheet-compatible)
//! - JSON: machine-readable full export including the budget
//!
//! Exports are written through [`write_export`], which replaces the target
//! atomically so a failed export never clobbers an earlier one.

pub mod csv;
pub mod json;

use std::path::{Path, PathBuf};

pub use self::csv::{export_expenses_csv, format_expenses_csv, CSV_EXPORT_FILENAME, CSV_HEADER};
pub use self::json::{
    export_full_json, ExpenseExport, ExportMetadata, EXPORT_SCHEMA_VERSION, JSON_EXPORT_FILENAME,
};

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::file_io::write_bytes_atomic;

/// Write an export document into `dir/filename`, returning the final path
pub fn write_export(dir: &Path, filename: &str, contents: &[u8]) -> ExpenseResult<PathBuf> {
    let path = dir.join(filename);
    write_bytes_atomic(&path, contents).map_err(|e| {
        ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_export(temp_dir.path(), "out.csv", b"Name,Amount,Category,Date\n").unwrap();

        assert_eq!(path, temp_dir.path().join("out.csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "Name,Amount,Category,Date\n");
    }

    #[test]
    fn test_failed_export_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the directory should be
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, "x").unwrap();

        let err = write_export(&blocker, "out.csv", b"data").unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
