//! Smooth-scroll emulation.
//!
//! Raw scroll input (wheel deltas, programmatic targets) moves a *target* position; every
//! animation frame the *animated* position eases toward it. Observers see only the animated
//! position, so a jumpy input stream becomes a continuous one.

use crate::{
    animation::anim::lerp,
    animation::ease::{Ease, damp},
    foundation::error::{HeroError, HeroResult},
};

/// How the animated position approaches its target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Motion {
    /// Exponential approach; `factor` is the fraction covered per 60 Hz frame.
    Lerp {
        /// Fraction in `(0, 1]`.
        factor: f64,
    },
    /// Timed tween from the current position to the target.
    Duration {
        /// Tween length, seconds (> 0).
        secs: f64,
        /// Easing curve.
        ease: Ease,
    },
}

impl Default for Motion {
    fn default() -> Self {
        Self::Lerp { factor: 0.1 }
    }
}

/// Smooth-scroll settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollOpts {
    /// Approach mode.
    pub motion: Motion,
    /// Multiplier applied to wheel deltas.
    pub wheel_multiplier: f64,
    /// When false, wheel input jumps straight to the target.
    pub smooth_wheel: bool,
}

impl Default for SmoothScrollOpts {
    fn default() -> Self {
        Self {
            motion: Motion::default(),
            wheel_multiplier: 1.0,
            smooth_wheel: true,
        }
    }
}

impl SmoothScrollOpts {
    /// Reject non-finite or out-of-range parameters.
    pub fn validate(&self) -> HeroResult<()> {
        match self.motion {
            Motion::Lerp { factor } => {
                if !(factor.is_finite() && factor > 0.0 && factor <= 1.0) {
                    return Err(HeroError::validation(
                        "smooth-scroll lerp factor must be in (0, 1]",
                    ));
                }
            }
            Motion::Duration { secs, .. } => {
                if !(secs.is_finite() && secs > 0.0) {
                    return Err(HeroError::validation(
                        "smooth-scroll duration must be > 0",
                    ));
                }
            }
        }
        if !self.wheel_multiplier.is_finite() {
            return Err(HeroError::validation(
                "smooth-scroll wheel_multiplier must be finite",
            ));
        }
        Ok(())
    }
}

/// Emitted when the animated position changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollEvent {
    /// Animated scroll position, px.
    pub scroll: f64,
    /// Maximum scroll position, px.
    pub limit: f64,
    /// Position change since the previous frame, px.
    pub velocity: f64,
    /// `1` scrolling down, `-1` scrolling up, `0` at rest.
    pub direction: i8,
    /// `scroll / limit`, or `0` for an empty range.
    pub progress: f64,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    elapsed_s: f64,
}

/// Smooth-scroll emulator.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOpts,
    animated: f64,
    target: f64,
    limit: f64,
    velocity: f64,
    direction: i8,
    tween: Option<Tween>,
    last_time_ms: Option<f64>,
    pending_jump: bool,
    stopped: bool,
}

impl SmoothScroll {
    /// Create an emulator at position 0 with scroll range `[0, limit]`.
    pub fn new(opts: SmoothScrollOpts, limit: f64) -> Self {
        Self {
            opts,
            animated: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            velocity: 0.0,
            direction: 0,
            tween: None,
            last_time_ms: None,
            pending_jump: false,
            stopped: false,
        }
    }

    /// Animated position, px.
    pub fn scroll(&self) -> f64 {
        self.animated
    }

    /// Target position, px.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Maximum scroll position, px.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Whether the animated position is still moving toward the target.
    pub fn is_scrolling(&self) -> bool {
        self.animated != self.target
    }

    /// Whether input is currently ignored.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Change the scroll range; the target and position are clamped into it.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        if self.animated > self.limit {
            self.velocity = self.limit - self.animated;
            self.animated = self.limit;
            self.pending_jump = true;
        }
    }

    /// Ignore input until [`SmoothScroll::start`]; motion in flight settles at the current spot.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.target = self.animated;
        self.tween = None;
    }

    /// Accept input again.
    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Feed a raw wheel delta, px. Positive scrolls down.
    pub fn wheel(&mut self, delta: f64) {
        if self.stopped || !delta.is_finite() {
            return;
        }
        let target = self.target + delta * self.opts.wheel_multiplier;
        self.scroll_to(target, !self.opts.smooth_wheel);
    }

    /// Move the target. `immediate` skips easing and jumps on the next frame.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) {
        if self.stopped || !target.is_finite() {
            return;
        }
        self.target = target.clamp(0.0, self.limit);
        if immediate {
            self.jump(self.target);
        } else if matches!(self.opts.motion, Motion::Duration { .. }) {
            self.tween = Some(Tween {
                from: self.animated,
                elapsed_s: 0.0,
            });
        }
    }

    /// Native scroll happened outside the emulator; adopt the position without easing.
    pub fn native_scroll(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        self.target = position.clamp(0.0, self.limit);
        self.jump(self.target);
    }

    fn jump(&mut self, to: f64) {
        self.tween = None;
        if self.animated != to {
            self.velocity = to - self.animated;
            self.animated = to;
            self.pending_jump = true;
        }
    }

    /// Advance one animation frame at wall time `time_ms`.
    ///
    /// Returns an event only when the animated position moved (or jumped) this frame.
    pub fn raf(&mut self, time_ms: f64) -> Option<ScrollEvent> {
        let dt_s = self
            .last_time_ms
            .map(|last| ((time_ms - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_time_ms = Some(time_ms);

        let before = self.animated;
        if self.animated != self.target {
            self.animated = match self.opts.motion {
                Motion::Lerp { factor } => {
                    let next = damp(self.animated, self.target, factor * 60.0, dt_s);
                    if next.round() == self.target.round() && (next - self.target).abs() < 0.5 {
                        self.target
                    } else {
                        next
                    }
                }
                Motion::Duration { secs, ease } => {
                    let tween = self.tween.get_or_insert(Tween {
                        from: self.animated,
                        elapsed_s: 0.0,
                    });
                    tween.elapsed_s += dt_s;
                    let t = (tween.elapsed_s / secs).min(1.0);
                    if t >= 1.0 {
                        self.target
                    } else {
                        lerp(tween.from, self.target, ease.apply(t))
                    }
                }
            };
            if self.animated == self.target {
                self.tween = None;
            }
        }

        let moved = self.animated != before;
        if !moved && !self.pending_jump {
            self.velocity = 0.0;
            return None;
        }
        if moved {
            self.velocity = self.animated - before;
        }
        self.pending_jump = false;
        self.direction = if self.velocity > 0.0 {
            1
        } else if self.velocity < 0.0 {
            -1
        } else {
            0
        };

        Some(ScrollEvent {
            scroll: self.animated,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                self.animated / self.limit
            } else {
                0.0
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
