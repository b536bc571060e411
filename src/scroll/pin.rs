use crate::{
    foundation::core::{Progress, Viewport},
    foundation::error::{HeroError, HeroResult},
};

/// Pin behaviour of the hero section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinOpts {
    /// Pinned scroll distance in viewport heights.
    pub distance_viewports: f64,
    /// Seconds the reported progress takes to catch up with the scroll position. `None`
    /// reports the raw progress directly.
    pub scrub_secs: Option<f64>,
    /// Whether the pinned distance is added to the document's scroll range.
    pub pin_spacing: bool,
}

impl Default for PinOpts {
    fn default() -> Self {
        Self {
            distance_viewports: 4.0,
            scrub_secs: Some(1.0),
            pin_spacing: true,
        }
    }
}

impl PinOpts {
    /// Distance must be positive; scrub, when set, non-negative.
    pub fn validate(&self) -> HeroResult<()> {
        if !(self.distance_viewports.is_finite() && self.distance_viewports > 0.0) {
            return Err(HeroError::validation("pin distance_viewports must be > 0"));
        }
        if let Some(s) = self.scrub_secs {
            if !(s.is_finite() && s >= 0.0) {
                return Err(HeroError::validation("pin scrub_secs must be >= 0"));
            }
        }
        Ok(())
    }

    /// Resolve against a viewport and the region's document offset.
    pub fn spec(&self, viewport: Viewport, region_top_px: f64) -> PinSpec {
        PinSpec {
            region_top_px,
            distance_px: viewport.height * self.distance_viewports,
            scrub_secs: self.scrub_secs,
            pin_spacing: self.pin_spacing,
        }
    }
}

/// A resolved pin trigger: starts when the region's top reaches the viewport's top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PinSpec {
    /// Document offset of the region's top edge, px.
    pub region_top_px: f64,
    /// Pinned scroll distance, px.
    pub distance_px: f64,
    /// Progress catch-up time, seconds.
    pub scrub_secs: Option<f64>,
    /// Whether the distance extends the scroll range.
    pub pin_spacing: bool,
}

impl PinSpec {
    /// Scroll position at which pinning starts.
    pub fn start(&self) -> f64 {
        self.region_top_px
    }

    /// Scroll position at which pinning ends.
    pub fn end(&self) -> f64 {
        self.region_top_px + self.distance_px
    }

    /// Scroll range added to the document by this pin.
    pub fn spacing_px(&self) -> f64 {
        if self.pin_spacing {
            self.distance_px
        } else {
            0.0
        }
    }

    /// Progress for a scroll position, clamped to `[0, 1]`.
    pub fn raw_progress(&self, scroll: f64) -> f64 {
        if self.distance_px <= 0.0 {
            return if scroll >= self.start() { 1.0 } else { 0.0 };
        }
        let p = (scroll - self.start()) / self.distance_px;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

/// Where the scroll position is relative to the pinned distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinState {
    /// Above the pin start; the region scrolls normally.
    Before,
    /// Inside the pinned distance; the region stays fixed.
    Pinned,
    /// Past the pin end; the region scrolls away.
    After,
}

/// Progress report for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PinUpdate {
    /// Reported progress in `[0, 1]`.
    pub progress: Progress,
    /// `1` progressing forward, `-1` backward.
    pub direction: i8,
    /// Pin state at the current scroll position.
    pub state: PinState,
}

/// Maps scroll position to pin progress, optionally smoothed by scrub.
#[derive(Clone, Debug)]
pub struct PinController {
    spec: PinSpec,
    reported: f64,
    last_scroll: f64,
}

/// Reported progress snaps to the raw value once this close.
const SCRUB_SNAP: f64 = 1e-4;

impl PinController {
    /// Controller at scroll position 0.
    pub fn new(spec: PinSpec) -> Self {
        let reported = spec.raw_progress(0.0);
        Self {
            spec,
            reported,
            last_scroll: 0.0,
        }
    }

    /// The resolved trigger.
    pub fn spec(&self) -> &PinSpec {
        &self.spec
    }

    /// Last reported progress.
    pub fn progress(&self) -> Progress {
        Progress(self.reported)
    }

    /// Pin state for a scroll position.
    pub fn state_at(&self, scroll: f64) -> PinState {
        if scroll < self.spec.start() {
            PinState::Before
        } else if scroll <= self.spec.end() {
            PinState::Pinned
        } else {
            PinState::After
        }
    }

    /// Translation that keeps the region fixed on screen at `scroll`, px.
    pub fn pin_offset_px(&self, scroll: f64) -> f64 {
        (scroll - self.spec.start()).clamp(0.0, self.spec.distance_px.max(0.0))
    }

    /// Recompute progress for this frame.
    ///
    /// Returns an update only when the reported progress changed. With scrub, the reported
    /// value approaches the raw one exponentially, leaving under 1% of the gap after
    /// `scrub_secs`.
    pub fn update(&mut self, scroll: f64, dt_s: f64) -> Option<PinUpdate> {
        if !scroll.is_finite() {
            return None;
        }
        self.last_scroll = scroll;
        let raw = self.spec.raw_progress(scroll);

        let next = match self.spec.scrub_secs {
            Some(s) if s > 0.0 => {
                let k = 1.0 - (-5.0 * dt_s.max(0.0) / s).exp();
                let v = self.reported + (raw - self.reported) * k;
                if (raw - v).abs() < SCRUB_SNAP { raw } else { v }
            }
            _ => raw,
        };

        if next == self.reported {
            return None;
        }
        let direction = if next > self.reported { 1 } else { -1 };
        self.reported = next;
        Some(PinUpdate {
            progress: Progress(next),
            direction,
            state: self.state_at(scroll),
        })
    }

    /// Jump the reported progress to the raw value at `scroll`, skipping scrub.
    pub fn refresh(&mut self, scroll: f64) -> PinUpdate {
        let before = self.reported;
        self.last_scroll = scroll;
        self.reported = self.spec.raw_progress(scroll);
        PinUpdate {
            progress: Progress(self.reported),
            direction: if self.reported < before { -1 } else { 1 },
            state: self.state_at(scroll),
        }
    }

    /// Scroll position seen by the last update.
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
