//! BLAKE3 file digests with streaming reads.
//!
//! Digests are only used to detect accidental content drift between runs,
//! never as a security control, so any consistent collision-resistant hash
//! would do. BLAKE3 is fast and produces a fixed 64-character hex string.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::SyncError;

/// Read buffer size for streaming hashing.
const READ_BUF_SIZE: usize = 64 * 1024;

/// Compute the BLAKE3 digest of a file's full byte content as lowercase hex.
///
/// Streams the file through a buffered reader so large inputs are never
/// held in memory whole. An unreadable file is a fatal error for the
/// invocation; no digest is produced for it.
pub fn hash_file(path: &Path) -> Result<String, SyncError> {
    let file = File::open(path).map_err(|e| SyncError::io(path, e))?;
    let mut reader = BufReader::with_capacity(READ_BUF_SIZE, file);
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut reader, &mut hasher).map_err(|e| SyncError::io(path, e))?;
    Ok(hasher.finalize().to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_matches_in_memory_blake3() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"hello world").unwrap();

        let digest = hash_file(&path).unwrap();
        assert_eq!(digest, blake3::hash(b"hello world").to_hex().to_string());
    }

    #[test]
    fn test_hash_is_fixed_length_hex() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"").unwrap();

        let digest = hash_file(&path).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_differs_for_different_content() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"one").unwrap();
        fs::write(&b, b"two").unwrap();

        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn test_hash_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = hash_file(&path).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
