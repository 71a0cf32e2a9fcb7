//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExpenseError;

/// Temp file used while rewriting `path` (same directory, so rename is atomic)
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write_fn` receives a buffered writer over the temp file. The target is
/// either completely replaced or left untouched; the temp file is removed on
/// any failure.
pub fn write_atomic<P, F>(path: P, write_fn: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, write_fn).and_then(|_| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp<F>(temp_path: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    write_fn(&mut writer)?;
    writer.flush()?;

    // Sync to disk before rename
    writer.get_ref().sync_all()
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        writer.write_all(b"\n")
    })
    .map_err(|e| ExpenseError::persistence(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_json_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();

        let loaded: TestData =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");

        write_atomic(&path, |w| w.write_all(b"Category,Amount,Date\n")).unwrap();

        assert!(path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_failed_write_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");
        fs::write(&path, "original\n").unwrap();

        let result = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_temp_path_for() {
        let path = Path::new("/data/daily_expenses.csv");
        assert_eq!(
            temp_path_for(path),
            PathBuf::from("/data/daily_expenses.csv.tmp")
        );
    }
}
