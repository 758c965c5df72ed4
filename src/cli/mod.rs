//! CLI argument parsing for linescope.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Linescope: apply source tidy-ups only to the lines a diff touched.
///
/// Every command except `normalize-numbers` reads a unified diff on stdin
/// (for example `git diff -U0 --no-prefix`) and works on the destination
/// line ranges it describes.
#[derive(Parser, Debug)]
#[command(name = "linescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read configuration from this file instead of `.linescope.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for linescope.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the changed destination line intervals of each file.
    ///
    /// Text output is one `path<TAB>start<TAB>stop` row per interval,
    /// with `stop` exclusive.
    Intervals(IntervalsArgs),

    /// Refill changed comment paragraphs and tidy changed code lines.
    ///
    /// Rewrites each destination file in place.
    FillComments,

    /// Merge adjacent string literals on changed lines.
    ///
    /// Rewrites each destination file in place. Files whose extension is
    /// listed in `squash_skip_extensions` are left alone.
    SquashStrings,

    /// Normalize numeric literals in text read from stdin.
    NormalizeNumbers,
}

/// Arguments for the `intervals` command.
#[derive(Parser, Debug)]
pub struct IntervalsArgs {
    /// Print JSON instead of tab-separated rows.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
