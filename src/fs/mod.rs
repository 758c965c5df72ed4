//! Filesystem utilities for linescope.
//!
//! Destination files are only ever replaced atomically, so an interrupted or
//! failed rewrite never leaves a half-written source file behind.

pub mod atomic;

pub use atomic::{atomic_write, rewrite_file};
