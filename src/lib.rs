//! Linescope: change-scoped source tidying driven by unified diffs.
//!
//! [`diff::parse`] turns a unified diff into the destination line intervals
//! each file's hunks touched. The [`rewrite`] transforms then tidy only
//! those lines, and [`fs::rewrite_file`] applies them in place atomically.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod numbers;
pub mod rewrite;
pub mod scanner;
