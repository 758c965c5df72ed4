//! Implementation of the `linescope squash-strings` command.

use super::rewrite_each;
use crate::config::Config;
use crate::diff;
use crate::error::Result;
use crate::rewrite::squash_changed_strings;
use std::io::{Read, Write};
use std::path::Path;

/// Squash adjacent string literals in every file named by the diff on `input`.
///
/// Paths in `skip_paths` and files with an extension in
/// `squash_skip_extensions` are left alone.
pub fn squash_strings(input: &mut dyn Read, root: &Path, config: &Config) -> Result<()> {
    let diffs = diff::parse(input)?;

    rewrite_each(
        &diffs,
        root,
        |d| !config.is_skipped_path(&d.dst_path) && !config.skips_squash(&d.dst_path),
        |d, r, w| {
            let mut content = Vec::new();
            r.read_to_end(&mut content)?;
            w.write_all(&squash_changed_strings(&d.dst_changes, &content))?;
            Ok(())
        },
    )
}
