// src/carrier.rs - Advisory carrier-board check via the plugin manager
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Checks `/proc/device-tree/chosen/plugin-manager/ids` for the expected
/// carrier board. Only ever logs; never affects resolution.
#[derive(Debug)]
pub struct CarrierCheck {
    ids_dir: PathBuf,
    warned: AtomicBool,
}

impl CarrierCheck {
    pub fn new(ids_dir: impl Into<PathBuf>) -> Self {
        Self {
            ids_dir: ids_dir.into(),
            warned: AtomicBool::new(false),
        }
    }

    pub fn ids_dir(&self) -> &Path {
        &self.ids_dir
    }

    /// Plugin-manager id starting with `prefix`, if the ids directory exists.
    /// `Err(())` means the directory itself is missing or unreadable.
    fn find_board(&self, prefix: &str) -> Result<Option<String>, ()> {
        let entries = fs::read_dir(&self.ids_dir).map_err(|_| ())?;
        Ok(entries
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .find(|name| name.starts_with(prefix)))
    }

    /// Warn about missing plugin-manager data, at most once per check.
    /// Returns whether the warning was emitted by this call.
    pub fn warn_missing_ids(&self) -> bool {
        if self.warned.swap(true, Ordering::Relaxed) {
            return false;
        }
        tracing::warn!("Plugin manager information missing from device tree");
        tracing::warn!("Cannot determine whether the expected carrier board is present");
        true
    }

    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }

    /// Re-arm the one-time warning.
    pub fn reset(&self) {
        self.warned.store(false, Ordering::Relaxed);
    }

    /// Run the check for a board expecting one of `carrier_boards`.
    pub fn check(&self, carrier_boards: &[&str]) {
        if !self.ids_dir.is_dir() {
            self.warn_missing_ids();
            return;
        }
        if carrier_boards.is_empty() {
            return;
        }
        let mut found = None;
        for board in carrier_boards {
            match self.find_board(&format!("{}-", board)) {
                Ok(Some(id)) => {
                    found = Some(id);
                    break;
                }
                Ok(None) => {}
                Err(()) => {
                    self.warn_missing_ids();
                    return;
                }
            }
        }
        match found {
            Some(id) => tracing::debug!("Carrier board {} detected", id),
            None => {
                tracing::warn!("Carrier board is not from a TI starter kit");
                tracing::warn!("Pin mappings may be incorrect for this carrier board");
            }
        }
    }
}
