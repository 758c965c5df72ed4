//! Implementation of the `linescope fill-comments` command.

use super::rewrite_each;
use crate::config::Config;
use crate::diff;
use crate::error::Result;
use crate::rewrite::{FillOptions, rewrite_changed_lines};
use std::io::Read;
use std::path::Path;

/// Refill changed comments in every file named by the diff on `input`.
///
/// The whole diff is parsed before any file is touched.
pub fn fill_comments(input: &mut dyn Read, root: &Path, config: &Config) -> Result<()> {
    let diffs = diff::parse(input)?;
    let options = FillOptions::from(config);

    rewrite_each(
        &diffs,
        root,
        |d| !config.is_skipped_path(&d.dst_path),
        |d, r, w| rewrite_changed_lines(&d.dst_changes, r, w, &options),
    )
}
