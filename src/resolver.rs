// src/resolver.rs - Board pin resolution pipeline
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::board::{BoardInfo, BoardModel, BoardSpec};
use crate::carrier::CarrierCheck;
use crate::channel::{ChannelTableSet, ResolvedGpio};
use crate::config::{GpioNumbering, ResolverConfig};
use crate::error::{ResolveError, Result};
use crate::gpio::{global_line, relative_offset, ChipMetadata, GpioLine};
use crate::platform;
use crate::pwm;
use crate::sysfs::SysfsLocator;

/// Output of one successful resolution pass.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub model: BoardModel,
    pub info: BoardInfo,
    pub channels: ChannelTableSet,
}

/// GPIO controller state gathered before any table is built.
#[derive(Debug, Default)]
struct GpioControllers {
    dirs: HashMap<&'static str, PathBuf>,
    metadata: HashMap<&'static str, ChipMetadata>,
}

pub struct Resolver {
    config: ResolverConfig,
    locator: SysfsLocator,
    carrier: CarrierCheck,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        let locator = SysfsLocator::from_config(&config);
        let carrier = CarrierCheck::new(config.plugin_manager_ids_path());
        Self {
            config,
            locator,
            carrier,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn locator(&self) -> &SysfsLocator {
        &self.locator
    }

    pub fn carrier(&self) -> &CarrierCheck {
        &self.carrier
    }

    /// Identify the running board and resolve its pin table.
    pub fn resolve(&self) -> Result<Resolution> {
        let compatibles = platform::read_compatibles(&self.config.compatible_path())?;
        let spec = platform::identify(&compatibles)?;
        let channels = self.resolve_board(spec)?;
        Ok(Resolution {
            model: spec.model,
            info: spec.board_info(),
            channels,
        })
    }

    /// Resolve a specific board's pin table against sysfs.
    pub fn resolve_board(&self, spec: &BoardSpec) -> Result<ChannelTableSet> {
        let numbering = self.config.gpio.numbering;
        if numbering == GpioNumbering::Global {
            self.carrier.check(spec.carrier_boards);
        }

        let controllers = self.gpio_controllers(spec, numbering)?;
        let gpio = spec
            .pins
            .iter()
            .map(|pin| -> Result<ResolvedGpio> {
                let controller_dir = controllers.dirs.get(pin.controller).cloned();
                let chip = controllers.metadata.get(pin.controller);
                let line = match numbering {
                    GpioNumbering::Global => {
                        // Every controller has metadata in global mode.
                        let chip = chip.ok_or_else(|| ResolveError::RequiredControllerMissing {
                            controller: pin.controller.to_string(),
                        })?;
                        global_line(pin, chip)?
                    }
                    GpioNumbering::ChipRelative => GpioLine::ChipRelative {
                        offset: relative_offset(pin, chip.map(|c| c.ngpio))?,
                    },
                };
                Ok(ResolvedGpio { controller_dir, line })
            })
            .collect::<Result<Vec<_>>>()?;

        let pwm = pwm::resolve_controllers(&self.locator, spec.pwm_controllers());
        let channels = ChannelTableSet::build(spec.pins, &gpio, &pwm)?;
        tracing::info!(
            "Resolved {} channels for {} ({} PWM capable)",
            channels.len(),
            spec.model,
            channels.pwm_capable()
        );
        Ok(channels)
    }

    /// Locate each GPIO controller and read metadata where numbering needs it.
    fn gpio_controllers(&self, spec: &BoardSpec, numbering: GpioNumbering) -> Result<GpioControllers> {
        let mut controllers = GpioControllers::default();
        for name in spec.gpio_controllers() {
            let needs_metadata = numbering == GpioNumbering::Global
                || spec
                    .pins
                    .iter()
                    .any(|p| p.controller == name && p.offset.needs_chip_count());

            let Some(dir) = self.locator.locate(name) else {
                if needs_metadata {
                    return Err(ResolveError::RequiredControllerMissing {
                        controller: name.to_string(),
                    });
                }
                continue;
            };
            if needs_metadata {
                let metadata = ChipMetadata::read(name, &dir)?;
                controllers.metadata.insert(name, metadata);
            }
            controllers.dirs.insert(name, dir);
        }
        Ok(controllers)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
