//! Board abstraction and pin tables for the supported TI starter kits.
//!
//! Every board is described by a [`BoardSpec`]: its device-tree compatible
//! strings, its 40-pin header table, and descriptive metadata. The tables are
//! fixed data; only their resolution against sysfs happens at runtime.

pub mod tables;

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub use tables::BOARDS;

/// Supported board models, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardModel {
    J721eSk,
    Am68Sk,
    Am69Sk,
    Am62aSk,
    Am62pSk,
}

impl BoardModel {
    pub const ALL: [BoardModel; 5] = [
        BoardModel::J721eSk,
        BoardModel::Am68Sk,
        BoardModel::Am69Sk,
        BoardModel::Am62aSk,
        BoardModel::Am62pSk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardModel::J721eSk => "J721E_SK",
            BoardModel::Am68Sk => "AM68_SK",
            BoardModel::Am69Sk => "AM69_SK",
            BoardModel::Am62aSk => "AM62A_SK",
            BoardModel::Am62pSk => "AM62P_SK",
        }
    }

    pub fn spec(&self) -> &'static BoardSpec {
        // BOARDS is declared in ALL order, one entry per model.
        &BOARDS[*self as usize]
    }
}

impl fmt::Display for BoardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BoardModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A value that may differ between controller die revisions, keyed by the
/// controller's `ngpio` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerChipCount<T: 'static> {
    Fixed(T),
    Variant(&'static [(u32, T)]),
}

impl<T: Copy + 'static> PerChipCount<T> {
    /// Look up the value for a controller exposing `ngpio` lines.
    ///
    /// `Fixed` ignores `ngpio`. `Variant` yields `None` when `ngpio` is
    /// unknown or not listed.
    pub fn resolve(&self, ngpio: Option<u32>) -> Option<T> {
        match self {
            PerChipCount::Fixed(value) => Some(*value),
            PerChipCount::Variant(entries) => {
                let ngpio = ngpio?;
                entries.iter().find(|(count, _)| *count == ngpio).map(|(_, v)| *v)
            }
        }
    }

    pub fn needs_chip_count(&self) -> bool {
        matches!(self, PerChipCount::Variant(_))
    }
}

/// Hardware PWM channel wired to a header pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmRef {
    /// Device-tree node name of the PWM controller, e.g. `"3020000.pwm"`.
    pub controller: &'static str,
    /// Channel index within that controller.
    pub id: u32,
}

/// One physical header pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDefinition {
    /// Line offset within the GPIO controller (not global).
    pub offset: PerChipCount<u32>,
    /// Exported sysfs name; `None` means `gpio<global number>`.
    pub export_name: Option<PerChipCount<&'static str>>,
    /// gpiochip index of the owning controller.
    pub chip: u32,
    /// Device-tree node name of the owning controller, e.g. `"600000.gpio"`.
    pub controller: &'static str,
    /// Header position (BOARD numbering).
    pub board: u32,
    /// Broadcom-compatible number (BCM numbering).
    pub bcm: u32,
    /// SoC signal name (SOC numbering).
    pub soc: &'static str,
    pub pwm: Option<PwmRef>,
}

impl PinDefinition {
    pub const fn new(
        offset: u32,
        chip: u32,
        controller: &'static str,
        board: u32,
        bcm: u32,
        soc: &'static str,
    ) -> Self {
        Self {
            offset: PerChipCount::Fixed(offset),
            export_name: None,
            chip,
            controller,
            board,
            bcm,
            soc,
            pwm: None,
        }
    }

    pub const fn with_pwm(self, controller: &'static str, id: u32) -> Self {
        Self {
            pwm: Some(PwmRef { controller, id }),
            ..self
        }
    }

    /// Replace the fixed offset with one keyed by the controller's `ngpio`.
    pub const fn with_variant_offset(self, offsets: &'static [(u32, u32)]) -> Self {
        Self {
            offset: PerChipCount::Variant(offsets),
            ..self
        }
    }

    pub const fn with_export_name(self, name: PerChipCount<&'static str>) -> Self {
        Self {
            export_name: Some(name),
            ..self
        }
    }
}

/// Free-form descriptive metadata, for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardInfo(BTreeMap<String, String>);

impl BoardInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&[(&str, &str)]> for BoardInfo {
    fn from(entries: &[(&str, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Everything known about a board model at compile time.
#[derive(Debug, Clone, Copy)]
pub struct BoardSpec {
    pub model: BoardModel,
    /// Device-tree compatible strings identifying the board.
    pub compatibles: &'static [&'static str],
    pub pins: &'static [PinDefinition],
    pub info: &'static [(&'static str, &'static str)],
    /// Plugin-manager id prefixes of the expected carrier board(s).
    pub carrier_boards: &'static [&'static str],
}

impl BoardSpec {
    pub fn board_info(&self) -> BoardInfo {
        BoardInfo::from(self.info)
    }

    /// Distinct GPIO controller node names, in first-appearance order.
    pub fn gpio_controllers(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for pin in self.pins {
            if !names.contains(&pin.controller) {
                names.push(pin.controller);
            }
        }
        names
    }

    /// Distinct PWM controller node names, in first-appearance order.
    pub fn pwm_controllers(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for pwm in self.pins.iter().filter_map(|p| p.pwm) {
            if !names.contains(&pwm.controller) {
                names.push(pwm.controller);
            }
        }
        names
    }
}
