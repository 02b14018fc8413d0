//! Checksync - change detection for text data directories.
//!
//! Digests every `<root>/data/*.txt` file (excluding `all.txt`) with
//! BLAKE3, compares the resulting table against the one persisted at
//! `<root>/checksums`, and rewrites the persisted table only when the two
//! mappings differ. An unchanged run leaves the file untouched so its
//! modification time keeps signaling "no change" to downstream consumers.

pub mod checksum;
pub mod cli;
pub mod error;
pub mod logging;

use anyhow::Context;

use crate::checksum::SyncConfig;
use crate::cli::Cli;
use crate::error::AppExitCode;

/// Run the application logic for a parsed CLI invocation.
///
/// Initializes logging, runs the sync pipeline, and reports the outcome.
/// Errors propagate to the caller for exit-code mapping and reporting.
pub fn run_app(cli: Cli) -> anyhow::Result<AppExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = SyncConfig::new(cli.path);
    let outcome = checksum::sync(&config)
        .with_context(|| format!("Sync failed for {}", config.root_path.display()))?;

    if outcome.rewritten {
        log::info!(
            "Checksum table rewritten: {} entr{} in {}",
            outcome.entries,
            if outcome.entries == 1 { "y" } else { "ies" },
            config.checksum_file().display()
        );
    } else {
        log::info!("Checksums unchanged ({} entries)", outcome.entries);
    }

    Ok(AppExitCode::Success)
}
