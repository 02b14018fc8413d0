//! Persistence of the checksum table.
//!
//! The on-disk format is line-oriented plain text, one record per entry:
//! `basename<TAB>hexdigest`. No header, no escaping; a base-name containing
//! a tab cannot be represented and round-trips as a malformed record.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{ChecksumTable, SyncError};

/// Load the previously persisted table.
///
/// A missing file is the expected state on first run and yields an empty
/// table. Any line that does not split into exactly two tab-separated
/// fields fails the whole load; there is no skip-and-continue.
pub fn load_previous(path: &Path) -> Result<ChecksumTable, SyncError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ChecksumTable::new()),
        Err(e) => return Err(SyncError::io(path, e)),
    };

    let mut table = ChecksumTable::new();
    for (index, line) in content.lines().enumerate() {
        let mut fields = line.trim().split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(digest), None) if !name.is_empty() => {
                table.insert(name.to_string(), digest.to_string());
            }
            _ => {
                return Err(SyncError::MalformedLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                });
            }
        }
    }
    Ok(table)
}

/// Write the table to `path`, fully replacing any previous content.
///
/// Records are emitted in the table's unspecified iteration order; the
/// line order of the persisted file is not a contract.
pub fn save(table: &ChecksumTable, path: &Path) -> Result<(), SyncError> {
    let mut out = String::new();
    for (name, digest) in table.iter() {
        out.push_str(name);
        out.push('\t');
        out.push_str(digest);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| SyncError::io(path, e))
}
