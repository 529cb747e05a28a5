//! Write attachment payloads to the output directory.

use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Strip embedded newline characters from an attachment filename.
///
/// Idempotent. Everything else is left as-is; this tool is not a
/// security-hardened filename sanitizer.
pub fn normalize_filename(name: &str) -> String {
    name.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Write one attachment payload below `output_dir`.
///
/// The destination is `output_dir` joined with `filename` (already
/// normalized by the caller). An existing file of the same name is
/// truncated and overwritten.
pub fn write_attachment(output_dir: &Path, filename: &str, payload: &[u8]) -> Result<PathBuf> {
    let path = output_dir.join(filename);
    std::fs::write(&path, payload).map_err(|e| ExtractError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_newlines() {
        assert_eq!(normalize_filename("inv\noice.pdf"), "invoice.pdf");
        assert_eq!(normalize_filename("inv\r\noice.pdf"), "invoice.pdf");
        assert_eq!(normalize_filename("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_filename("a\nb\rc.bin");
        assert_eq!(normalize_filename(&once), once);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_attachment(tmp.path(), "dup.txt", b"first").unwrap();
        let path = write_attachment(tmp.path(), "dup.txt", b"second").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn test_write_error_carries_destination() {
        let err = write_attachment(Path::new("/no/such/dir"), "a.txt", b"x").unwrap_err();
        match err {
            ExtractError::Write { path, .. } => {
                assert_eq!(path, Path::new("/no/such/dir/a.txt"));
            }
            other => panic!("expected Write error, got {other:?}"),
        }
    }
}
