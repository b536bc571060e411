use crate::{
    foundation::core::{Progress, Viewport},
    foundation::error::{HeroError, HeroResult},
    scroll::{
        pin::{PinController, PinSpec, PinUpdate},
        smooth::{ScrollEvent, SmoothScroll, SmoothScrollOpts},
        ticker::{CallbackId, FrameTick, Ticker, TickerOpts},
    },
};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;

static PLUGINS: OnceLock<()> = OnceLock::new();

/// Mark the scroll plugins as registered for this process.
///
/// This is a process-wide marker: the smooth-scroll emulator and pin triggers need no global
/// setup of their own, but components call this on mount so the first registration is logged
/// once and [`plugins_registered`] can report it. Only the first call returns `true`; later
/// calls (one per mounted component, say) are no-ops.
pub fn register_plugins() -> bool {
    let mut first = false;
    PLUGINS.get_or_init(|| {
        first = true;
        tracing::debug!("scroll plugins registered");
    });
    first
}

/// Whether [`register_plugins`] has run in this process.
pub fn plugins_registered() -> bool {
    PLUGINS.get().is_some()
}

/// Application-level scroll runtime settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuntimeOpts {
    /// Viewport size.
    pub viewport: Viewport,
    /// Height of the page content without pin spacing, px.
    pub content_height_px: f64,
    /// Smooth-scroll settings.
    pub smooth: SmoothScrollOpts,
    /// Frame clock settings.
    pub ticker: TickerOpts,
}

impl RuntimeOpts {
    /// Settings for a viewport and content height, other sections defaulted.
    pub fn new(viewport: Viewport, content_height_px: f64) -> Self {
        Self {
            viewport,
            content_height_px,
            smooth: SmoothScrollOpts::default(),
            ticker: TickerOpts::default(),
        }
    }
}

/// Handle of a pin trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(u64);

type UpdateCallback = Box<dyn FnMut(&PinUpdate)>;

struct Trigger {
    id: TriggerId,
    controller: PinController,
    on_update: UpdateCallback,
    // Cleared by the owner when it goes away without killing the trigger.
    alive: Option<Rc<Cell<bool>>>,
}

impl Trigger {
    fn is_alive(&self) -> bool {
        self.alive.as_ref().is_none_or(|a| a.get())
    }
}

/// Drives the frame loop: frame clock, smooth scroll and pin triggers.
///
/// Created once per application. Components register triggers and frame callbacks against it
/// and release them on unmount; [`ScrollRuntime::shutdown`] releases whatever is left.
pub struct ScrollRuntime {
    opts: RuntimeOpts,
    ticker: Ticker,
    smooth: SmoothScroll,
    triggers: Vec<Trigger>,
    next_trigger: u64,
    last_event: Option<ScrollEvent>,
    shut_down: bool,
}

impl std::fmt::Debug for ScrollRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRuntime")
            .field("opts", &self.opts)
            .field("ticker", &self.ticker)
            .field("smooth", &self.smooth)
            .field("triggers", &self.triggers.len())
            .finish()
    }
}

impl ScrollRuntime {
    /// Validate settings, register plugins (once per process) and build the runtime.
    pub fn new(opts: RuntimeOpts) -> HeroResult<Self> {
        opts.viewport.validate()?;
        opts.smooth.validate()?;
        opts.ticker.validate()?;
        if !(opts.content_height_px.is_finite() && opts.content_height_px >= 0.0) {
            return Err(HeroError::validation("content height must be >= 0"));
        }
        register_plugins();

        let limit = (opts.content_height_px - opts.viewport.height).max(0.0);
        tracing::debug!(limit, "scroll runtime created");
        Ok(Self {
            opts,
            ticker: Ticker::new(opts.ticker),
            smooth: SmoothScroll::new(opts.smooth, limit),
            triggers: Vec::new(),
            next_trigger: 0,
            last_event: None,
            shut_down: false,
        })
    }

    /// Viewport size.
    pub fn viewport(&self) -> Viewport {
        self.opts.viewport
    }

    /// Current eased scroll position, px.
    pub fn scroll(&self) -> f64 {
        self.smooth.scroll()
    }

    /// Maximum scroll position including pin spacing, px.
    pub fn limit(&self) -> f64 {
        self.smooth.limit()
    }

    /// The last scroll event emitted by the smooth-scroll emulator.
    pub fn last_event(&self) -> Option<ScrollEvent> {
        self.last_event
    }

    /// Feed a wheel delta, px.
    pub fn wheel(&mut self, delta: f64) {
        self.smooth.wheel(delta);
    }

    /// Scroll to a position, eased unless `immediate`.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) {
        self.smooth.scroll_to(target, immediate);
    }

    /// Register a frame callback; it runs at the start of every frame.
    pub fn add_frame_callback(&mut self, f: impl FnMut(&FrameTick) + 'static) -> CallbackId {
        self.ticker.add(f)
    }

    /// Release a frame callback.
    pub fn remove_frame_callback(&mut self, id: CallbackId) -> bool {
        self.ticker.remove(id)
    }

    /// Create a pin trigger. `on_update` runs whenever the trigger's progress changes.
    pub fn create_trigger(
        &mut self,
        spec: PinSpec,
        on_update: impl FnMut(&PinUpdate) + 'static,
    ) -> HeroResult<TriggerId> {
        self.push_trigger(spec, None, Box::new(on_update))
    }

    /// Create a pin trigger tied to an owner's liveness flag.
    ///
    /// Once `alive` is cleared the trigger no longer runs and is released on the next frame.
    pub fn create_owned_trigger(
        &mut self,
        spec: PinSpec,
        alive: Rc<Cell<bool>>,
        on_update: impl FnMut(&PinUpdate) + 'static,
    ) -> HeroResult<TriggerId> {
        self.push_trigger(spec, Some(alive), Box::new(on_update))
    }

    fn push_trigger(
        &mut self,
        spec: PinSpec,
        alive: Option<Rc<Cell<bool>>>,
        on_update: UpdateCallback,
    ) -> HeroResult<TriggerId> {
        if self.shut_down {
            return Err(HeroError::lifecycle(
                "cannot create a trigger on a shut down runtime",
            ));
        }
        let id = TriggerId(self.next_trigger);
        self.next_trigger += 1;

        let mut controller = PinController::new(spec);
        controller.refresh(self.smooth.scroll());
        self.triggers.push(Trigger {
            id,
            controller,
            on_update,
            alive,
        });
        self.refresh_limit();
        tracing::debug!(?id, start = spec.start(), end = spec.end(), "pin trigger created");
        Ok(id)
    }

    /// Release a pin trigger. Returns whether it existed.
    pub fn kill_trigger(&mut self, id: TriggerId) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.id != id);
        let removed = self.triggers.len() != before;
        if removed {
            self.refresh_limit();
            tracing::debug!(?id, "pin trigger killed");
        }
        removed
    }

    /// Current progress of a trigger.
    pub fn trigger_progress(&self, id: TriggerId) -> Option<Progress> {
        self.triggers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.controller.progress())
    }

    /// Live frame callbacks plus live triggers.
    pub fn registrations(&self) -> usize {
        self.ticker.len() + self.triggers.iter().filter(|t| t.is_alive()).count()
    }

    fn prune_dead_triggers(&mut self) {
        let before = self.triggers.len();
        self.triggers.retain(Trigger::is_alive);
        let pruned = before - self.triggers.len();
        if pruned > 0 {
            self.refresh_limit();
            tracing::debug!(pruned, "released triggers of dropped owners");
        }
    }

    fn refresh_limit(&mut self) {
        let spacing: f64 = self.triggers.iter().map(|t| t.controller.spec().spacing_px()).sum();
        let limit = (self.opts.content_height_px + spacing - self.opts.viewport.height).max(0.0);
        self.smooth.set_limit(limit);
    }

    /// Run one animation frame at wall time `now_ms`.
    ///
    /// Order: triggers of dropped owners are released, frame clock and callbacks run, the
    /// smooth scroll steps, then every trigger recomputes its progress from the eased position.
    pub fn frame(&mut self, now_ms: f64) -> FrameTick {
        self.prune_dead_triggers();
        let tick = self.ticker.tick(now_ms);
        if let Some(event) = self.smooth.raf(tick.time_s * 1000.0) {
            self.last_event = Some(event);
        }

        let scroll = self.smooth.scroll();
        let dt_s = tick.delta_ms / 1000.0;
        for trigger in &mut self.triggers {
            if !trigger.is_alive() {
                continue;
            }
            if let Some(update) = trigger.controller.update(scroll, dt_s) {
                (trigger.on_update)(&update);
            }
        }
        tick
    }

    /// Whether [`ScrollRuntime::shutdown`] has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Release every frame callback and trigger and stop accepting scroll input.
    pub fn shutdown(&mut self) -> HeroResult<()> {
        if self.shut_down {
            return Err(HeroError::lifecycle("scroll runtime already shut down"));
        }
        let released = self.registrations();
        self.ticker.clear();
        self.triggers.clear();
        self.smooth.stop();
        self.shut_down = true;
        tracing::debug!(released, "scroll runtime shut down");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/runtime.rs"]
mod tests;
