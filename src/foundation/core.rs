use crate::foundation::error::{HeroError, HeroResult};

/// Normalized progress through the pinned scroll distance.
///
/// Nominally in `[0, 1]`. Values slightly outside that range are kept as given; every consumer
/// clamps through its own window. NaN is mapped to `0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Start of the pinned distance.
    pub const START: Self = Self(0.0);
    /// End of the pinned distance.
    pub const END: Self = Self(1.0);

    /// Wrap a raw progress value, replacing NaN with `0`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() { Self(0.0) } else { Self(v) }
    }

    /// Raw value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Value clamped to `[0, 1]`.
    pub fn clamped(self) -> f64 {
        Self::new(self.0).0.clamp(0.0, 1.0)
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a validated viewport.
    pub fn new(width: f64, height: f64) -> HeroResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    /// Both dimensions must be finite and strictly positive.
    pub fn validate(&self) -> HeroResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(HeroError::validation("viewport width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(HeroError::validation("viewport height must be > 0"));
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
