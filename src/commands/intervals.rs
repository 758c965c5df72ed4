//! Implementation of the `linescope intervals` command.

use crate::diff::{self, Diff};
use crate::error::{LinescopeError, Result};
use std::io::{Read, Write};

/// Parse the diff on `input` and print its changed destination intervals.
///
/// Text output has one `path<TAB>start<TAB>stop` row per interval. JSON
/// output is an array of `{"dst_path", "dst_changes"}` objects, one per
/// file, including files with no changed lines.
pub fn write_intervals(input: &mut dyn Read, out: &mut dyn Write, json: bool) -> Result<()> {
    let diffs = diff::parse(input)?;

    if json {
        write_json(&diffs, out)?;
    } else {
        for d in &diffs {
            for interval in &d.dst_changes {
                writeln!(out, "{}\t{}\t{}", d.dst_path, interval.start, interval.stop)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_json(diffs: &[Diff], out: &mut dyn Write) -> Result<()> {
    let text = serde_json::to_string_pretty(diffs).map_err(|e| {
        LinescopeError::UserError(format!("failed to serialize intervals: {}", e))
    })?;
    writeln!(out, "{}", text)?;
    Ok(())
}
