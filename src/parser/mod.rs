//! Test runner output parsing
//!
//! Reads raw runner logs and turns them into structured outcomes.

mod pytest;

pub use pytest::extract;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};

/// Read a runner log. Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ReportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_read_input_lossy() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"s3tests/functional/test_s3.py::test_\xffa PASSED\n")
            .unwrap();

        let content = read_input(file.path()).unwrap();
        assert!(content.contains('\u{fffd}'));
        assert_eq!(extract(&content).outcomes.len(), 1);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ReportError::ReadInput { .. }));
    }
}
