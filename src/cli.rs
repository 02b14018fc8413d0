//! Command-line interface definitions for checksync.
//!
//! The CLI surface is a single operation: point the tool at a root
//! directory and it syncs `<root>/checksums` against `<root>/data/*.txt`.
//!
//! # Example
//!
//! ```bash
//! # Sync checksums for a dataset root
//! checksync /srv/dataset
//!
//! # Verbose mode for per-file digests
//! checksync -v /srv/dataset
//!
//! # Structured errors for scripting
//! checksync --json-errors /srv/dataset
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Detect changes in a directory of text data files via content checksums.
///
/// Checksync digests every `<PATH>/data/*.txt` file (excluding `all.txt`),
/// compares the result against the persisted table at `<PATH>/checksums`,
/// and rewrites that table only when something actually changed. An
/// unchanged run leaves the file's modification time intact.
#[derive(Debug, Parser)]
#[command(name = "checksync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory containing `data/` and the `checksums` file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_positional_path() {
        let cli = Cli::parse_from(["checksync", "/srv/dataset"]);
        assert_eq!(cli.path, PathBuf::from("/srv/dataset"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.json_errors);
    }

    #[test]
    fn test_cli_counts_verbosity() {
        let cli = Cli::parse_from(["checksync", "-vv", "/srv/dataset"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_path() {
        assert!(Cli::try_parse_from(["checksync"]).is_err());
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["checksync", "-q", "-v", "/srv/dataset"]).is_err());
    }
}
