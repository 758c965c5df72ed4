//! Implementation of the `linescope normalize-numbers` command.
//!
//! This shares [`numbers::normalize`] with `fill-comments`, so literals are
//! spelled the same way by both commands.

use crate::error::Result;
use crate::numbers;
use std::io::{Read, Write};

/// Copy `input` to `out` with every numeric literal normalized.
pub fn normalize_numbers(input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let mut text = Vec::new();
    input.read_to_end(&mut text)?;

    out.write_all(&numbers::normalize(&text))?;
    out.flush()?;
    Ok(())
}
