// src/sysfs.rs - Controller directory lookup across sysfs bus hierarchies
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;

/// Finds a controller's sysfs directory from its device-tree node name.
#[derive(Debug, Clone)]
pub struct SysfsLocator {
    prefixes: Vec<PathBuf>,
}

impl SysfsLocator {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config
                .sysfs
                .prefixes
                .iter()
                .map(|p| config.host_path(p))
                .collect(),
        )
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    /// First `prefix/node` that is a directory, in prefix order.
    pub fn locate(&self, node: &str) -> Option<PathBuf> {
        let found = self
            .prefixes
            .iter()
            .map(|prefix| prefix.join(node))
            .find(|candidate| candidate.is_dir());
        match &found {
            Some(dir) => tracing::debug!("{} found at {}", node, dir.display()),
            None => tracing::debug!("{} not found under any sysfs prefix", node),
        }
        found
    }
}

/// Read a small sysfs attribute, trimmed. `None` if missing or empty.
pub fn read_attr(dir: &Path, attr: &str) -> Option<String> {
    fs::read_to_string(dir.join(attr))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// First entry of `dir` whose name starts with `prefix`, in listing order.
pub fn first_entry_with_prefix(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    entries
        .flatten()
        .find(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .map(|entry| entry.path())
}
