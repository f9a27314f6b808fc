// src/channel.rs - Resolved channel descriptors and the three lookup tables
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::board::PinDefinition;
use crate::error::{ResolveError, Result};
use crate::gpio::GpioLine;
use crate::pwm::PwmResolution;

/// Pin numbering mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberingMode {
    Board,
    Bcm,
    Soc,
}

impl NumberingMode {
    pub const ALL: [NumberingMode; 3] = [NumberingMode::Board, NumberingMode::Bcm, NumberingMode::Soc];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingMode::Board => "BOARD",
            NumberingMode::Bcm => "BCM",
            NumberingMode::Soc => "SOC",
        }
    }
}

impl FromStr for NumberingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BOARD" => Ok(NumberingMode::Board),
            "BCM" => Ok(NumberingMode::Bcm),
            "SOC" => Ok(NumberingMode::Soc),
            _ => Err(format!("unknown numbering mode '{}' (expected board, bcm or soc)", s)),
        }
    }
}

/// A pin identifier in one of the three numbering modes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Channel {
    Board(u32),
    Bcm(u32),
    Soc(String),
}

impl Channel {
    pub fn mode(&self) -> NumberingMode {
        match self {
            Channel::Board(_) => NumberingMode::Board,
            Channel::Bcm(_) => NumberingMode::Bcm,
            Channel::Soc(_) => NumberingMode::Soc,
        }
    }

    pub fn of(pin: &PinDefinition, mode: NumberingMode) -> Self {
        match mode {
            NumberingMode::Board => Channel::Board(pin.board),
            NumberingMode::Bcm => Channel::Bcm(pin.bcm),
            NumberingMode::Soc => Channel::Soc(pin.soc.to_string()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Board(n) | Channel::Bcm(n) => write!(f, "{}", n),
            Channel::Soc(name) => f.write_str(name),
        }
    }
}

/// Everything pin I/O needs to drive one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    pub channel: Channel,
    pub gpio_chip: u32,
    pub gpio_controller_dir: Option<PathBuf>,
    pub line: GpioLine,
    pub pwm_chip_dir: Option<PathBuf>,
    pub pwm_id: Option<u32>,
}

impl ChannelInfo {
    /// Hardware PWM chip directory and channel, when both are usable.
    pub fn pwm(&self) -> Option<(&Path, u32)> {
        match (&self.pwm_chip_dir, self.pwm_id) {
            (Some(dir), Some(id)) => Some((dir.as_path(), id)),
            _ => None,
        }
    }
}

/// Per-pin GPIO data computed by the resolver, indexed like the pin table.
#[derive(Debug, Clone)]
pub struct ResolvedGpio {
    pub controller_dir: Option<PathBuf>,
    pub line: GpioLine,
}

/// Header-pin, BCM and SoC-name tables for one board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelTableSet {
    pub board: BTreeMap<u32, ChannelInfo>,
    pub bcm: BTreeMap<u32, ChannelInfo>,
    pub soc: BTreeMap<String, ChannelInfo>,
}

impl ChannelTableSet {
    /// Build all three tables. `gpio` is parallel to `pins`.
    ///
    /// Fails if two pins share a BOARD, BCM or SOC key.
    pub fn build(
        pins: &[PinDefinition],
        gpio: &[ResolvedGpio],
        pwm: &HashMap<String, PwmResolution>,
    ) -> Result<Self> {
        debug_assert_eq!(pins.len(), gpio.len());
        let mut tables = Self::default();
        for (pin, resolved) in pins.iter().zip(gpio) {
            let describe = |mode| ChannelInfo {
                channel: Channel::of(pin, mode),
                gpio_chip: pin.chip,
                gpio_controller_dir: resolved.controller_dir.clone(),
                line: resolved.line.clone(),
                pwm_chip_dir: pin
                    .pwm
                    .and_then(|p| pwm.get(p.controller))
                    .and_then(PwmResolution::chip_dir)
                    .cloned(),
                pwm_id: pin.pwm.map(|p| p.id),
            };
            let duplicate = tables.board.insert(pin.board, describe(NumberingMode::Board)).is_some()
                || tables.bcm.insert(pin.bcm, describe(NumberingMode::Bcm)).is_some()
                || tables.soc.insert(pin.soc.to_string(), describe(NumberingMode::Soc)).is_some();
            if duplicate {
                return Err(ResolveError::DuplicateChannel {
                    board: pin.board,
                    bcm: pin.bcm,
                    soc: pin.soc.to_string(),
                });
            }
        }
        Ok(tables)
    }

    pub fn get(&self, channel: &Channel) -> Option<&ChannelInfo> {
        match channel {
            Channel::Board(n) => self.board.get(n),
            Channel::Bcm(n) => self.bcm.get(n),
            Channel::Soc(name) => self.soc.get(name),
        }
    }

    /// Descriptors of one mode, in key order.
    pub fn table(&self, mode: NumberingMode) -> Vec<&ChannelInfo> {
        match mode {
            NumberingMode::Board => self.board.values().collect(),
            NumberingMode::Bcm => self.bcm.values().collect(),
            NumberingMode::Soc => self.soc.values().collect(),
        }
    }

    /// Channel count; identical for all three tables.
    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn pwm_capable(&self) -> usize {
        self.board.values().filter(|info| info.pwm().is_some()).count()
    }
}
