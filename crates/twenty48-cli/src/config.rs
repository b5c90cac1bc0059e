use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Host configuration, loaded from a TOML file.
///
/// ```toml
/// seed = 42
///
/// [render]
/// tick_ms = 150
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Default)]
pub struct Config {
    /// Seed for the tile generator. Omit for entropy-based seeding.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub render: Render,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Render {
    /// Redraw cadence in milliseconds. The render loop only reads state;
    /// ticking faster than the terminal repaints buys nothing.
    #[serde(default = "defaults::tick_ms")]
    pub tick_ms: u64,
}

impl Default for Render {
    fn default() -> Self {
        Self {
            tick_ms: defaults::tick_ms(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn tick_ms() -> u64 {
        150
    }
}
