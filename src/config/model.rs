//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".linescope.yaml";

/// Configuration for the rewriting commands.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Comment filling
    // =========================================================================
    /// Widest column a refilled comment line may reach.
    #[serde(default = "default_max_column")]
    pub max_column: u64,

    /// Whether changed lines get their numeric literals normalized.
    #[serde(default = "default_true")]
    pub normalize_numbers: bool,

    // =========================================================================
    // String squashing
    // =========================================================================
    /// File extensions `squash-strings` leaves alone (no leading dots).
    #[serde(default = "default_squash_skip_extensions")]
    pub squash_skip_extensions: Vec<String>,

    // =========================================================================
    // Shared
    // =========================================================================
    /// Destination paths that are never rewritten.
    #[serde(default = "default_skip_paths")]
    pub skip_paths: Vec<String>,
}

fn default_max_column() -> u64 {
    80
}

fn default_true() -> bool {
    true
}

fn default_squash_skip_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_skip_paths() -> Vec<String> {
    vec!["/dev/null".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_column: default_max_column(),
            normalize_numbers: default_true(),
            squash_skip_extensions: default_squash_skip_extensions(),
            skip_paths: default_skip_paths(),
        }
    }
}
