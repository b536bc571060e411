use crate::{
    foundation::error::{HeroError, HeroResult},
    render::markup::HeroCopy,
    scene::model::{CubeTable, Timeline},
    scroll::{pin::PinOpts, smooth::SmoothScrollOpts, ticker::TickerOpts},
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Full configuration of the pinned hero section.
///
/// Every section is optional in JSON and falls back to the landing page defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Pin distance and scrub.
    pub pin: PinOpts,
    /// Smooth-scroll emulator settings.
    pub smooth: SmoothScrollOpts,
    /// Frame clock settings.
    pub ticker: TickerOpts,
    /// Staging windows and property ranges.
    pub timeline: Timeline,
    /// Cube descriptors.
    pub cubes: CubeTable,
    /// Hero text.
    pub copy: HeroCopy,
}

impl HeroConfig {
    /// Parse a config from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> HeroResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| HeroError::config(format!("parse hero config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string. The result is validated.
    pub fn from_json_str(s: &str) -> HeroResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk. The result is validated.
    pub fn from_path(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HeroError::config(format!("open hero config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every section.
    pub fn validate(&self) -> HeroResult<()> {
        self.pin.validate()?;
        self.smooth.validate()?;
        self.ticker.validate()?;
        self.timeline.validate()?;
        self.cubes.validate()?;
        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> HeroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HeroError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
