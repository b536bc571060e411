use crate::foundation::error::{HeroError, HeroResult};

/// Frame clock settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickerOpts {
    /// Frame gaps longer than this (ms) are treated as lag and shortened. `0` disables lag
    /// smoothing, so the clock always follows wall time.
    pub lag_threshold_ms: f64,
    /// Gap (ms) a lagging frame is shortened to.
    pub adjusted_lag_ms: f64,
}

impl Default for TickerOpts {
    // The landing page disables lag smoothing so scroll position never drifts from wall time.
    fn default() -> Self {
        Self {
            lag_threshold_ms: 0.0,
            adjusted_lag_ms: 33.0,
        }
    }
}

impl TickerOpts {
    /// Both values finite and non-negative.
    pub fn validate(&self) -> HeroResult<()> {
        if !(self.lag_threshold_ms.is_finite() && self.lag_threshold_ms >= 0.0) {
            return Err(HeroError::validation("ticker lag_threshold_ms must be >= 0"));
        }
        if !(self.adjusted_lag_ms.is_finite() && self.adjusted_lag_ms >= 0.0) {
            return Err(HeroError::validation("ticker adjusted_lag_ms must be >= 0"));
        }
        Ok(())
    }
}

/// Timing of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameTick {
    /// Clock time since the first tick, seconds.
    pub time_s: f64,
    /// Clock time since the previous tick, ms.
    pub delta_ms: f64,
    /// Frame counter, starting at 1.
    pub frame: u64,
}

/// Handle of a registered frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallbackId(u64);

type FrameCallback = Box<dyn FnMut(&FrameTick)>;

/// Frame clock and frame-callback registry.
///
/// Callbacks run in registration order, once per [`Ticker::tick`].
pub struct Ticker {
    opts: TickerOpts,
    start_ms: Option<f64>,
    last_ms: f64,
    time_ms: f64,
    frame: u64,
    next_id: u64,
    callbacks: Vec<(CallbackId, FrameCallback)>,
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("opts", &self.opts)
            .field("time_ms", &self.time_ms)
            .field("frame", &self.frame)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Ticker {
    /// Create an idle ticker.
    pub fn new(opts: TickerOpts) -> Self {
        Self {
            opts,
            start_ms: None,
            last_ms: 0.0,
            time_ms: 0.0,
            frame: 0,
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    /// Change lag smoothing. A threshold of `0` disables it.
    pub fn lag_smoothing(&mut self, threshold_ms: f64, adjusted_lag_ms: f64) {
        self.opts.lag_threshold_ms = threshold_ms.max(0.0);
        self.opts.adjusted_lag_ms = adjusted_lag_ms.max(0.0);
    }

    /// Register a frame callback.
    pub fn add(&mut self, f: impl FnMut(&FrameTick) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(f)));
        id
    }

    /// Unregister a frame callback. Returns whether it was registered.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    /// Unregister every frame callback.
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Advance the clock to wall time `now_ms` and run every callback.
    ///
    /// Wall time going backwards is treated as a zero-length frame.
    pub fn tick(&mut self, now_ms: f64) -> FrameTick {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.frame == 0 {
            self.last_ms = now_ms;
        }

        let mut elapsed = (now_ms - self.last_ms).max(0.0);
        if self.opts.lag_threshold_ms > 0.0 && elapsed > self.opts.lag_threshold_ms {
            let skipped = elapsed - self.opts.adjusted_lag_ms;
            self.start_ms = Some(start + skipped);
            elapsed = self.opts.adjusted_lag_ms;
        }
        self.last_ms = now_ms;
        self.frame += 1;

        let clock_ms = (now_ms - self.start_ms.unwrap_or(start)).max(self.time_ms);
        let tick = FrameTick {
            time_s: clock_ms / 1000.0,
            delta_ms: elapsed,
            frame: self.frame,
        };
        self.time_ms = clock_ms;

        for (_, cb) in &mut self.callbacks {
            cb(&tick);
        }
        tick
    }

    /// Clock time of the last tick, seconds.
    pub fn time_s(&self) -> f64 {
        self.time_ms / 1000.0
    }

    /// Number of ticks so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/ticker.rs"]
mod tests;
