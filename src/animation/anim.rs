use crate::{
    foundation::core::Progress,
    foundation::error::{HeroError, HeroResult},
    scene::model::CubePose,
};

/// Linear interpolation between two values.
///
/// `t` is not clamped here; callers pass a local progress that is already in `[0, 1]`.
pub trait Lerp: Sized {
    /// `a + (b - a) * t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for CubePose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            top: f64::lerp(&a.top, &b.top, t),
            left: f64::lerp(&a.left, &b.left, t),
            rotate_x: f64::lerp(&a.rotate_x, &b.rotate_x, t),
            rotate_y: f64::lerp(&a.rotate_y, &b.rotate_y, t),
            rotate_z: f64::lerp(&a.rotate_z, &b.rotate_z, t),
            z: f64::lerp(&a.z, &b.z, t),
        }
    }
}

/// Scalar shorthand for [`Lerp::lerp`].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    f64::lerp(&a, &b, t)
}

/// Piecewise-linear remap of global progress onto a local `[0, 1]` sub-range.
///
/// `local = clamp((progress - start) * rate, 0, 1)`, so the window opens at `start` and is fully
/// open at `start + 1 / rate`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Window {
    /// Global progress at which the window starts opening.
    pub start: f64,
    /// Local progress gained per unit of global progress (> 0).
    pub rate: f64,
}

impl Window {
    /// Build a window; see [`Window::validate`] for the accepted domain.
    pub const fn new(start: f64, rate: f64) -> Self {
        Self { start, rate }
    }

    /// Global progress at which the window is fully open.
    pub fn end(&self) -> f64 {
        self.start + 1.0 / self.rate
    }

    /// Local progress in `[0, 1]`.
    pub fn local(&self, progress: Progress) -> f64 {
        let v = (progress.get() - self.start) * self.rate;
        if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
    }

    /// `start` must be finite and `rate` finite and strictly positive.
    pub fn validate(&self, name: &str) -> HeroResult<()> {
        if !self.start.is_finite() {
            return Err(HeroError::validation(format!(
                "window '{name}' start must be finite"
            )));
        }
        if !(self.rate.is_finite() && self.rate > 0.0) {
            return Err(HeroError::validation(format!(
                "window '{name}' rate must be > 0"
            )));
        }
        Ok(())
    }
}

/// A property range sampled by a window's local progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Span {
    /// Value at local progress 0.
    pub from: f64,
    /// Value at local progress 1.
    pub to: f64,
}

impl Span {
    /// Build a span.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Interpolate at local progress `t`.
    pub fn at(&self, t: f64) -> f64 {
        lerp(self.from, self.to, t)
    }

    /// Smallest endpoint.
    pub fn min(&self) -> f64 {
        self.from.min(self.to)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
