//! Whole-file reading and atomic writing.
//!
//! Both codecs operate on complete in-memory buffers, so the filesystem
//! boundary is a pair of helpers: read the full source file, and write the
//! full result so that either the whole output appears at the destination
//! or nothing does.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read an entire file into memory.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Write `data` to `path` atomically.
///
/// The data is first written to a sibling temporary file which is then
/// renamed over the destination, so a failure mid-write never leaves a
/// partial artifact at `path`. The temporary file is removed on failure.
pub fn write_file_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("bytepress-core-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("write-then-read");
        write_file_atomic(&path, b"hello bytepress").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"hello bytepress");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_overwrite_existing() {
        let path = temp_path("overwrite");
        write_file_atomic(&path, b"first").unwrap();
        write_file_atomic(&path, b"second").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"second");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let path = temp_path("no-temp");
        write_file_atomic(&path, b"data").unwrap();
        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        assert!(!PathBuf::from(tmp).exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let path = temp_path("does-not-exist");
        assert!(read_file(&path).is_err());
    }
}
