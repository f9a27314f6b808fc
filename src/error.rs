// src/error.rs - Fatal resolution errors
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Conditions that abort a resolution pass.
///
/// PWM controllers that are missing or misconfigured are not errors; they
/// show up as [`crate::pwm::PwmResolution::Unavailable`] instead.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not determine TI SoC model from compatible list {compatibles:?}")]
    PlatformUnidentified { compatibles: Vec<String> },

    #[error("failed to read device-tree compatible file {}: {source}", path.display())]
    CompatibleUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GPIO controller {controller} not found under any sysfs prefix")]
    RequiredControllerMissing { controller: String },

    #[error("GPIO controller {controller} metadata unreadable: {reason}")]
    ControllerMetadataUnreadable { controller: String, reason: String },

    #[error("pin BOARD {board} / BCM {bcm} / SOC {soc} reuses a channel already in the table")]
    DuplicateChannel { board: u32, bcm: u32, soc: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
