use crate::{
    eval::mapper::compute_visual_state,
    foundation::core::Progress,
    foundation::error::{HeroError, HeroResult},
    render::surface::{RenderSurface, SurfaceBinding},
    scene::config::HeroConfig,
    session::runtime::{ScrollRuntime, TriggerId},
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Running totals for a mounted hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct HeroStats {
    /// Frames applied, including the one applied at mount.
    pub frames: u64,
    /// Element writes.
    pub written: u64,
    /// Element writes skipped for missing handles.
    pub skipped: u64,
    /// Progress of the last applied frame.
    pub last_progress: Progress,
}

/// The pinned hero section component.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeroSection;

impl HeroSection {
    /// Mount the hero onto `surface` with its region's top edge at `region_top_px`.
    ///
    /// Binds the surface (the four named elements must resolve), applies the frame for the
    /// current scroll position right away, then registers a pin trigger that recomputes and
    /// applies the visual state on every progress change. A shut down runtime is rejected
    /// before the surface is touched.
    pub fn mount<S>(
        runtime: &mut ScrollRuntime,
        config: &HeroConfig,
        surface: S,
        region_top_px: f64,
    ) -> HeroResult<HeroHandle>
    where
        S: RenderSurface + 'static,
        S::Handle: 'static,
    {
        config.validate()?;
        if !region_top_px.is_finite() {
            return Err(HeroError::validation("hero region top must be finite"));
        }
        if runtime.is_shut_down() {
            return Err(HeroError::lifecycle(
                "cannot mount the hero on a shut down runtime",
            ));
        }
        let spec = config.pin.spec(runtime.viewport(), region_top_px);
        let mut binding = SurfaceBinding::bind(surface)?;

        let cubes = config.cubes.clone();
        let timeline = config.timeline;
        let stats = Rc::new(RefCell::new(HeroStats::default()));

        let initial = Progress::new(spec.raw_progress(runtime.scroll()));
        let report = binding.apply(&compute_visual_state(&cubes, &timeline, initial));
        {
            let mut s = stats.borrow_mut();
            s.frames = 1;
            s.written = report.written as u64;
            s.skipped = report.skipped as u64;
            s.last_progress = initial;
        }

        let alive = Rc::new(Cell::new(true));
        let frame_alive = Rc::clone(&alive);
        let frame_stats = Rc::clone(&stats);
        let trigger = runtime.create_owned_trigger(spec, Rc::clone(&alive), move |update| {
            if !frame_alive.get() {
                return;
            }
            let state = compute_visual_state(&cubes, &timeline, update.progress);
            let report = binding.apply(&state);
            let mut s = frame_stats.borrow_mut();
            s.frames += 1;
            s.written += report.written as u64;
            s.skipped += report.skipped as u64;
            s.last_progress = update.progress;
        })?;

        tracing::debug!(?trigger, region_top_px, distance_px = spec.distance_px, "hero mounted");
        Ok(HeroHandle {
            trigger: Some(trigger),
            alive,
            stats,
        })
    }
}

/// A mounted hero. Call [`HeroHandle::unmount`] to release its trigger.
///
/// Dropping a still-mounted handle stops its updates at once; the runtime releases the
/// trigger on its next frame.
#[derive(Debug)]
pub struct HeroHandle {
    trigger: Option<TriggerId>,
    alive: Rc<Cell<bool>>,
    stats: Rc<RefCell<HeroStats>>,
}

impl HeroHandle {
    /// Totals so far.
    pub fn stats(&self) -> HeroStats {
        *self.stats.borrow()
    }

    /// The pin trigger driving this hero, while mounted.
    pub fn trigger(&self) -> Option<TriggerId> {
        self.trigger
    }

    /// Release the pin trigger; the surface is dropped with it.
    pub fn unmount(mut self, runtime: &mut ScrollRuntime) -> HeroStats {
        self.alive.set(false);
        if let Some(id) = self.trigger.take() {
            if !runtime.kill_trigger(id) {
                tracing::debug!(?id, "hero trigger already released");
            }
        }
        tracing::debug!("hero unmounted");
        self.stats()
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        if let Some(id) = self.trigger {
            self.alive.set(false);
            tracing::warn!(?id, "hero dropped while mounted; releasing its trigger");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/hero.rs"]
mod tests;
