//! Command implementations for linescope.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the per-file rewrite loop the in-place commands
//! share.

mod fill;
mod intervals;
mod normalize;
mod squash;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::diff::Diff;
use crate::error::{LinescopeError, Result};
use crate::fs::rewrite_file;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub use fill::fill_comments;
pub use intervals::write_intervals;
pub use normalize::normalize_numbers;
pub use squash::squash_strings;

/// Destination path of a deleted file. Never rewritten, whatever the config says.
const DEV_NULL: &str = "/dev/null";

/// Dispatch a command to its implementation.
///
/// Configuration is resolved against the working directory before any
/// command runs, so a bad config file fails fast with a user error.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        LinescopeError::UserError(format!("failed to read working directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Intervals(args) => write_intervals(&mut stdin, &mut stdout, args.json),
        Command::FillComments => fill_comments(&mut stdin, &cwd, &config),
        Command::SquashStrings => squash_strings(&mut stdin, &cwd, &config),
        Command::NormalizeNumbers => normalize_numbers(&mut stdin, &mut stdout),
    }
}

/// Rewrite the destination file of every diff `keep` accepts.
///
/// Files are independent: a failure is logged and the loop moves on. The
/// error returned at the end reports how many files could not be rewritten.
fn rewrite_each<K, T>(diffs: &[Diff], root: &Path, keep: K, transform: T) -> Result<()>
where
    K: Fn(&Diff) -> bool,
    T: Fn(&Diff, &mut dyn BufRead, &mut dyn Write) -> Result<()>,
{
    let mut failed = 0usize;

    for diff in diffs {
        if diff.dst_path == DEV_NULL || diff.dst_changes.is_empty() || !keep(diff) {
            log::debug!("skipping {}", diff.dst_path);
            continue;
        }

        let path = root.join(&diff.dst_path);
        log::debug!(
            "rewriting {} ({} changed ranges)",
            path.display(),
            diff.dst_changes.len()
        );
        if let Err(err) = rewrite_file(&path, |r, w| transform(diff, r, w)) {
            log::warn!("{}", err);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(LinescopeError::RewriteError(format!(
            "failed to rewrite {} of {} files",
            failed,
            diffs.len()
        )));
    }
    Ok(())
}
