//! # Resolver Configuration
//!
//! Where the resolver looks for device-tree and sysfs data, and which GPIO
//! numbering scheme it produces.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [device_tree]
//! compatible = "/proc/device-tree/compatible"
//! plugin_manager_ids = "/proc/device-tree/chosen/plugin-manager/ids"
//!
//! [sysfs]
//! root = "/"
//! prefixes = ["/sys/devices/", "/sys/devices/platform/"]
//!
//! [gpio]
//! numbering = "global"
//! ```
//!
//! Every section and key is optional; omitted values fall back to the live
//! system defaults.

// src/config.rs - Single configuration file
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Prefixes searched, in order, for a controller's device-tree node name.
/// Different SoC generations hang their controllers off different buses.
pub const DEFAULT_SYSFS_PREFIXES: [&str; 5] = [
    "/sys/devices/",
    "/sys/devices/platform/",
    "/sys/devices/platform/bus@100000/",
    "/sys/devices/platform/bus@100000/bus@100000:bus@28380000/",
    "/sys/devices/platform/bus@f0000/",
];

/// Top-level resolver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub device_tree: DeviceTreeConfig,
    #[serde(default)]
    pub sysfs: SysfsConfig,
    #[serde(default)]
    pub gpio: GpioConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceTreeConfig {
    #[serde(default = "default_compatible")]
    pub compatible: PathBuf,
    #[serde(default = "default_plugin_manager_ids")]
    pub plugin_manager_ids: PathBuf,
}

impl Default for DeviceTreeConfig {
    fn default() -> Self {
        Self {
            compatible: default_compatible(),
            plugin_manager_ids: default_plugin_manager_ids(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SysfsConfig {
    /// Absolute device-tree and sysfs paths are re-rooted under this directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            prefixes: default_prefixes(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GpioConfig {
    #[serde(default)]
    pub numbering: GpioNumbering,
}

/// How channel descriptors identify their GPIO line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GpioNumbering {
    /// Chip index plus chip-relative offset, straight from the pin table.
    #[default]
    ChipRelative,
    /// Kernel-global number computed from each controller's `base`.
    Global,
}

impl ResolverConfig {
    /// Default configuration re-rooted at `root`, for fixture trees and chroots.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.sysfs.root = root.into();
        config
    }

    /// Resolve an absolute host path against the configured root.
    pub fn host_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match path.strip_prefix("/") {
            Ok(relative) => self.sysfs.root.join(relative),
            Err(_) => path.to_path_buf(),
        }
    }

    pub fn compatible_path(&self) -> PathBuf {
        self.host_path(&self.device_tree.compatible)
    }

    pub fn plugin_manager_ids_path(&self) -> PathBuf {
        self.host_path(&self.device_tree.plugin_manager_ids)
    }
}

fn default_compatible() -> PathBuf {
    PathBuf::from("/proc/device-tree/compatible")
}
fn default_plugin_manager_ids() -> PathBuf {
    PathBuf::from("/proc/device-tree/chosen/plugin-manager/ids")
}
fn default_root() -> PathBuf {
    PathBuf::from("/")
}
fn default_prefixes() -> Vec<String> {
    DEFAULT_SYSFS_PREFIXES.iter().map(|p| p.to_string()).collect()
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ResolverConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: ResolverConfig = toml::from_str(&content)?;
    Ok(config)
}
