//! Enumeration, table computation, and the sync pipeline.
//!
//! One invocation is a straight line: list `<root>/data/*.txt`, digest each
//! file, load the previously persisted table, compare the two mappings, and
//! rewrite the persisted file only if they differ. Leaving an unchanged
//! file untouched preserves its modification time, which downstream
//! consumers (e.g. a build system) use as the "no change" signal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{hasher, store, ChecksumTable, SyncConfig, SyncError, SyncOutcome, AGGREGATE_FILE};

/// List the `*.txt` files directly inside `data_dir`.
///
/// No recursion into subdirectories; the aggregate `all.txt` is always
/// excluded. An empty directory yields an empty list, but a missing or
/// unreadable directory is a fatal listing error.
pub fn enumerate_data_files(data_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| SyncError::List {
            path: data_dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let is_txt = path.extension().is_some_and(|ext| ext == "txt");
        let is_aggregate = path.file_name().is_some_and(|name| name == AGGREGATE_FILE);
        if is_txt && !is_aggregate {
            files.push(path);
        }
    }
    Ok(files)
}

/// Digest every file and build the base-name → digest mapping.
///
/// Any unreadable file fails the whole computation; a partial table is
/// never produced.
pub fn compute_table(files: &[PathBuf]) -> Result<ChecksumTable, SyncError> {
    let mut table = ChecksumTable::new();
    for path in files {
        let digest = hasher::hash_file(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("{name}: {digest}");
        table.insert(name, digest);
    }
    Ok(table)
}

/// Run the full change-detection pipeline for one root directory.
///
/// Rewrites `<root>/checksums` if and only if the freshly computed table
/// differs from the persisted one as a whole mapping (added, removed, or
/// changed keys all trigger a rewrite).
pub fn sync(config: &SyncConfig) -> Result<SyncOutcome, SyncError> {
    let data_dir = config.data_dir();
    let checksum_file = config.checksum_file();

    let files = enumerate_data_files(&data_dir)?;
    log::debug!("Found {} data file(s) in {}", files.len(), data_dir.display());

    let current = compute_table(&files)?;
    let previous = store::load_previous(&checksum_file)?;

    let rewritten = current != previous;
    if rewritten {
        store::save(&current, &checksum_file)?;
    }

    Ok(SyncOutcome {
        rewritten,
        entries: current.len(),
    })
}
