//! Run configuration: where templates go and which nodes are skipped.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Template store used when `OPGEN_TEMPLATE_DIR` is not set.
pub const DEFAULT_TEMPLATE_DIR: &str = "/opt/vyatta/share/vyatta-op/templates";

/// Environment variable overriding the template store location.
pub const TEMPLATE_DIR_ENV: &str = "OPGEN_TEMPLATE_DIR";

/// Node names that get a directory but never a `node.def`.
pub const DEFAULT_EXCLUDED: &[&str] = &["clear", "show"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the generated template tree.
    pub base_dir: PathBuf,
    /// Names whose directories are created without definition files.
    pub exclude: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            exclude: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Default configuration with the base directory taken from the
    /// environment when present.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(TEMPLATE_DIR_ENV).filter(|d| !d.is_empty()) {
            config.base_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}
