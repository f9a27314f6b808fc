//! Board pin resolution for TI starter kits.
//!
//! Maps header pins, BCM-style numbers and SoC signal names to the Linux GPIO
//! and PWM sysfs resources of the running board. Board tables are fixed data
//! in [`board`]; [`Resolver`] matches them against the live system.
//!
//! ```no_run
//! use ti_gpio::{Channel, Resolver};
//!
//! let resolution = Resolver::default().resolve()?;
//! let pin = resolution.channels.get(&Channel::Board(32)).unwrap();
//! println!("{} pin 32 -> chip {} line {}", resolution.model, pin.gpio_chip, pin.line.number());
//! # Ok::<(), ti_gpio::ResolveError>(())
//! ```

pub mod board;
pub mod carrier;
pub mod channel;
pub mod config;
pub mod error;
pub mod gpio;
pub mod platform;
pub mod pwm;
pub mod resolver;
pub mod sysfs;

use std::sync::OnceLock;

pub use board::{BoardInfo, BoardModel, BoardSpec, PinDefinition};
pub use channel::{Channel, ChannelInfo, ChannelTableSet, NumberingMode};
pub use config::{load_config, GpioNumbering, ResolverConfig};
pub use error::{ResolveError, Result};
pub use gpio::GpioLine;
pub use resolver::{Resolution, Resolver};

static BOARD_DATA: OnceLock<Resolution> = OnceLock::new();

/// Resolve the running board once per process with the default configuration.
///
/// A failed attempt is not cached; the next call starts a fresh pass.
pub fn board_data() -> Result<&'static Resolution> {
    if let Some(data) = BOARD_DATA.get() {
        return Ok(data);
    }
    let resolution = Resolver::default().resolve()?;
    Ok(BOARD_DATA.get_or_init(|| resolution))
}
