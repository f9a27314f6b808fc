// Fake device-tree and sysfs trees for resolver tests
#![allow(dead_code)]

use std::fs;
use std::io;
use std::sync::{Arc, Mutex};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use tracing_subscriber::fmt::MakeWriter;
use ti_gpio::{GpioNumbering, ResolverConfig};

pub const PLATFORM: &str = "sys/devices/platform";
pub const BUS_100000: &str = "sys/devices/platform/bus@100000";
pub const BUS_F0000: &str = "sys/devices/platform/bus@f0000";

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Tree whose compatible file lists `compatibles`.
    pub fn new(compatibles: &[&str]) -> Self {
        let dir = tempdir().unwrap();
        let fixture = Self { dir };
        let mut raw = Vec::new();
        for compat in compatibles {
            raw.extend_from_slice(compat.as_bytes());
            raw.push(0);
        }
        fixture.write("proc/device-tree/compatible", &raw);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ResolverConfig {
        ResolverConfig::with_root(self.root())
    }

    pub fn global_config(&self) -> ResolverConfig {
        let mut config = self.config();
        config.gpio.numbering = GpioNumbering::Global;
        config
    }

    pub fn write(&self, relative: &str, contents: &[u8]) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// `<prefix>/<node>/gpio/gpiochipN/{base,ngpio}`.
    pub fn add_gpio_controller(&self, prefix: &str, node: &str, base: u32, ngpio: u32) -> PathBuf {
        let controller = self.root().join(prefix).join(node);
        let chip = format!("{}/{}/gpio/gpiochip{}", prefix, node, base);
        self.write(&format!("{}/base", chip), format!("{}\n", base).as_bytes());
        self.write(&format!("{}/ngpio", chip), format!("{}\n", ngpio).as_bytes());
        controller
    }

    /// `<prefix>/<node>/pwm/<pwmchip>`; returns the pwmchip directory.
    pub fn add_pwm_controller(&self, prefix: &str, node: &str, pwmchip: &str) -> PathBuf {
        let dir = self.root().join(prefix).join(node).join("pwm").join(pwmchip);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn add_plugin_manager_ids(&self, ids: &[&str]) {
        let dir = self.root().join("proc/device-tree/chosen/plugin-manager/ids");
        fs::create_dir_all(&dir).unwrap();
        for id in ids {
            fs::write(dir.join(id), b"").unwrap();
        }
    }
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }

    /// Run `f` with a WARN-level subscriber writing into this sink.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
