// src/pwm.rs - PWM controller discovery
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::sysfs::{first_entry_with_prefix, SysfsLocator};

/// Why a PWM controller cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwmUnavailable {
    /// Controller node not present, typically disabled in the device tree.
    ControllerAbsent,
    /// Controller present but has no `pwm` subdirectory.
    NoPwmDir,
    /// `pwm` subdirectory has no `pwmchip*` entry.
    NoPwmChip,
}

impl fmt::Display for PwmUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControllerAbsent => write!(f, "controller not found in sysfs"),
            Self::NoPwmDir => write!(f, "controller has no pwm directory"),
            Self::NoPwmChip => write!(f, "no pwmchip entry"),
        }
    }
}

/// Outcome for one PWM controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwmResolution {
    /// `<controller>/pwm/pwmchipN` directory.
    Available(PathBuf),
    Unavailable(PwmUnavailable),
}

impl PwmResolution {
    pub fn chip_dir(&self) -> Option<&PathBuf> {
        match self {
            PwmResolution::Available(dir) => Some(dir),
            PwmResolution::Unavailable(_) => None,
        }
    }
}

pub fn resolve_controller(locator: &SysfsLocator, controller: &str) -> PwmResolution {
    let Some(controller_dir) = locator.locate(controller) else {
        return PwmResolution::Unavailable(PwmUnavailable::ControllerAbsent);
    };
    let pwm_dir = controller_dir.join("pwm");
    if !pwm_dir.exists() {
        return PwmResolution::Unavailable(PwmUnavailable::NoPwmDir);
    }
    // Typically exactly one pwmchip; with several, listing order decides.
    match first_entry_with_prefix(&pwm_dir, "pwmchip") {
        Some(chip_dir) => {
            tracing::debug!("{}: using {}", controller, chip_dir.display());
            PwmResolution::Available(chip_dir)
        }
        None => PwmResolution::Unavailable(PwmUnavailable::NoPwmChip),
    }
}

/// Resolve every named controller. Unavailable ones are logged and kept,
/// so pins referencing them fall back to GPIO only.
pub fn resolve_controllers<'a>(
    locator: &SysfsLocator,
    controllers: impl IntoIterator<Item = &'a str>,
) -> HashMap<String, PwmResolution> {
    controllers
        .into_iter()
        .map(|controller| {
            let resolution = resolve_controller(locator, controller);
            if let PwmResolution::Unavailable(reason) = &resolution {
                tracing::warn!("PWM controller {} unavailable ({}); its pins are GPIO only", controller, reason);
            }
            (controller.to_string(), resolution)
        })
        .collect()
}
