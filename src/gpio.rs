// src/gpio.rs - GPIO controller metadata and line numbering
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::board::PinDefinition;
use crate::error::{ResolveError, Result};
use crate::sysfs::{first_entry_with_prefix, read_attr};

/// `base`/`ngpio` of one controller's `gpio/gpiochipN` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipMetadata {
    pub gpiochip_dir: PathBuf,
    pub base: u32,
    pub ngpio: u32,
}

impl ChipMetadata {
    /// Read metadata below a resolved controller directory.
    pub fn read(controller: &str, controller_dir: &Path) -> Result<Self> {
        let unreadable = |reason: String| ResolveError::ControllerMetadataUnreadable {
            controller: controller.to_string(),
            reason,
        };

        let gpio_dir = controller_dir.join("gpio");
        let gpiochip_dir = first_entry_with_prefix(&gpio_dir, "gpiochip")
            .ok_or_else(|| unreadable(format!("no gpiochip entry in {}", gpio_dir.display())))?;

        let read_u32 = |attr: &str| -> Result<u32> {
            let raw = read_attr(&gpiochip_dir, attr)
                .ok_or_else(|| unreadable(format!("missing {}/{}", gpiochip_dir.display(), attr)))?;
            raw.parse::<u32>()
                .map_err(|e| unreadable(format!("{} is not a number ({:?}): {}", attr, raw, e)))
        };
        let base = read_u32("base")?;
        let ngpio = read_u32("ngpio")?;

        tracing::debug!("{}: base={} ngpio={}", controller, base, ngpio);
        Ok(Self {
            gpiochip_dir,
            base,
            ngpio,
        })
    }
}

/// Resolved GPIO identity of a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "numbering", rename_all = "kebab-case")]
pub enum GpioLine {
    /// Offset within the owning gpiochip.
    ChipRelative { offset: u32 },
    /// Kernel-global number and its exported sysfs name.
    Global { number: u32, name: String },
}

impl GpioLine {
    pub fn number(&self) -> u32 {
        match self {
            GpioLine::ChipRelative { offset } => *offset,
            GpioLine::Global { number, .. } => *number,
        }
    }
}

/// Chip-relative offset of `pin`; `ngpio` is only consulted for per-count offsets.
pub fn relative_offset(pin: &PinDefinition, ngpio: Option<u32>) -> Result<u32> {
    pin.offset
        .resolve(ngpio)
        .ok_or_else(|| ResolveError::ControllerMetadataUnreadable {
            controller: pin.controller.to_string(),
            reason: match ngpio {
                Some(count) => format!("no offset for {} with ngpio={}", pin.soc, count),
                None => format!("offset of {} depends on ngpio, which is unknown", pin.soc),
            },
        })
}

/// `base + offset`, with the exported name taken from the table or synthesized.
pub fn global_line(pin: &PinDefinition, chip: &ChipMetadata) -> Result<GpioLine> {
    let offset = relative_offset(pin, Some(chip.ngpio))?;
    let number = chip
        .base
        .checked_add(offset)
        .ok_or_else(|| ResolveError::ControllerMetadataUnreadable {
            controller: pin.controller.to_string(),
            reason: format!("base {} + offset {} overflows", chip.base, offset),
        })?;
    let name = pin
        .export_name
        .and_then(|name| name.resolve(Some(chip.ngpio)))
        .map(str::to_string)
        .unwrap_or_else(|| format!("gpio{}", number));
    Ok(GpioLine::Global { number, name })
}
