//! Checksum table types and the change-detection pipeline.
//!
//! This module provides everything needed to detect content drift in a
//! flat directory of `*.txt` data files:
//! - [`hasher`]: BLAKE3 file digests (streaming)
//! - [`store`]: loading and saving the persisted tab-separated table
//! - [`sync`]: enumeration, table computation, and the compare-then-write
//!   pipeline
//!
//! # Example
//!
//! ```no_run
//! use checksync::checksum::{sync, SyncConfig};
//! use std::path::PathBuf;
//!
//! let config = SyncConfig::new(PathBuf::from("/srv/dataset"));
//! let outcome = sync(&config).unwrap();
//! if outcome.rewritten {
//!     println!("checksums updated ({} entries)", outcome.entries);
//! }
//! ```

pub mod hasher;
pub mod store;
pub mod sync;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use hasher::hash_file;
pub use store::{load_previous, save};
pub use sync::{compute_table, enumerate_data_files, sync};

/// Name of the subdirectory holding the tracked data files.
pub const DATA_DIR: &str = "data";

/// Name of the persisted checksum table inside the root directory.
pub const CHECKSUM_FILE: &str = "checksums";

/// Name of the aggregate data file that is never tracked.
pub const AGGREGATE_FILE: &str = "all.txt";

/// Mapping from data file base-name to its hex content digest.
///
/// Equality is pure mapping equality: same key set, same value per key.
/// Iteration order is unspecified and must not be relied on by consumers
/// of the persisted file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumTable {
    entries: HashMap<String, String>,
}

impl ChecksumTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous digest if any.
    pub fn insert(&mut self, name: String, digest: String) -> Option<String> {
        self.entries.insert(name, digest)
    }

    /// Look up the digest for a base-name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether the table holds an entry for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(base-name, digest)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ChecksumTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Configuration for one sync invocation.
///
/// Carries the root directory under which `data/*.txt` and the `checksums`
/// file live. Kept as an explicit value rather than ambient process state
/// so the library is callable without a CLI.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Root directory containing `data/` and `checksums`.
    pub root_path: PathBuf,
}

impl SyncConfig {
    /// Create a configuration for the given root directory.
    #[must_use]
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Path of the tracked data directory (`<root>/data`).
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.root_path.join(DATA_DIR)
    }

    /// Path of the persisted checksum table (`<root>/checksums`).
    #[must_use]
    pub fn checksum_file(&self) -> PathBuf {
        self.root_path.join(CHECKSUM_FILE)
    }
}

/// Result of one sync invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Whether the persisted table was rewritten.
    pub rewritten: bool,
    /// Number of entries in the current table.
    pub entries: usize,
}

/// Errors produced by the checksum pipeline.
///
/// All variants are fatal for the invocation: no partial table is ever
/// used or persisted after a failure.
#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    /// Listing the data directory failed (missing or unreadable).
    #[error("Failed to list data directory {path}: {source}")]
    List {
        /// The data directory that could not be listed.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A persisted checksum record did not split into exactly two
    /// tab-separated fields.
    #[error("Malformed checksum record at {path}:{line} (expected `name<TAB>digest`)")]
    MalformedLine {
        /// The checksum file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending record.
        line: usize,
    },
}

impl SyncError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
