use super::*;
use crate::scroll::pin::PinOpts;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn runtime() -> ScrollRuntime {
    let vp = Viewport::new(1280.0, 800.0).unwrap();
    ScrollRuntime::new(RuntimeOpts::new(vp, 1600.0)).unwrap()
}

fn unscrubbed(rt: &ScrollRuntime) -> PinSpec {
    PinOpts {
        scrub_secs: None,
        ..PinOpts::default()
    }
    .spec(rt.viewport(), 0.0)
}

#[test]
fn plugins_register_once_per_process() {
    let _ = runtime();
    assert!(plugins_registered());
    assert!(!register_plugins());
}

#[test]
fn pin_spacing_extends_scroll_range() {
    let mut rt = runtime();
    assert_eq!(rt.limit(), 800.0);
    let spec = unscrubbed(&rt);
    let id = rt.create_trigger(spec, |_| {}).unwrap();
    assert_eq!(rt.limit(), 800.0 + 3200.0);
    assert!(rt.kill_trigger(id));
    assert_eq!(rt.limit(), 800.0);
    assert!(!rt.kill_trigger(id));
}

#[test]
fn frames_drive_triggers_from_eased_scroll() {
    let mut rt = runtime();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let spec = unscrubbed(&rt);
    let id = rt
        .create_trigger(spec, move |u| s.borrow_mut().push(u.progress.get()))
        .unwrap();

    rt.frame(0.0);
    assert!(seen.borrow().is_empty());

    rt.wheel(1600.0);
    for i in 1..=300 {
        rt.frame(f64::from(i) * FRAME_MS);
    }

    let seen = seen.borrow();
    assert!(seen.len() > 10, "eased scroll spreads over many frames");
    assert!(seen.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(*seen.last().unwrap(), 0.5);
    assert_eq!(rt.trigger_progress(id), Some(Progress(0.5)));
    assert_eq!(rt.scroll(), 1600.0);
    assert_eq!(rt.last_event().unwrap().scroll, 1600.0);
}

#[test]
fn frame_callbacks_run_before_scroll_step() {
    let mut rt = runtime();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let f = frames.clone();
    let id = rt.add_frame_callback(move |t| f.borrow_mut().push(t.frame));
    rt.frame(0.0);
    rt.frame(FRAME_MS);
    assert!(rt.remove_frame_callback(id));
    rt.frame(2.0 * FRAME_MS);
    assert_eq!(*frames.borrow(), vec![1, 2]);
}

#[test]
fn shutdown_releases_everything_once() {
    let mut rt = runtime();
    let spec = unscrubbed(&rt);
    rt.create_trigger(spec, |_| {}).unwrap();
    rt.add_frame_callback(|_| {});
    assert_eq!(rt.registrations(), 2);

    rt.shutdown().unwrap();
    assert_eq!(rt.registrations(), 0);
    assert!(rt.is_shut_down());

    rt.wheel(500.0);
    rt.frame(0.0);
    assert_eq!(rt.scroll(), 0.0);

    assert!(rt.shutdown().is_err());
    assert!(rt.create_trigger(spec, |_| {}).is_err());
}

#[test]
fn invalid_options_are_rejected() {
    let vp = Viewport::default();
    assert!(ScrollRuntime::new(RuntimeOpts::new(vp, -1.0)).is_err());
    let mut opts = RuntimeOpts::new(vp, 100.0);
    opts.viewport.height = 0.0;
    assert!(ScrollRuntime::new(opts).is_err());
}

#[test]
fn owned_trigger_is_released_once_its_owner_is_gone() {
    let mut rt = runtime();
    let alive = Rc::new(Cell::new(true));
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let spec = unscrubbed(&rt);
    let id = rt
        .create_owned_trigger(spec, alive.clone(), move |_| c.set(c.get() + 1))
        .unwrap();
    assert_eq!(rt.limit(), 800.0 + 3200.0);

    alive.set(false);
    rt.scroll_to(800.0, true);
    rt.frame(0.0);
    assert_eq!(calls.get(), 0);
    assert_eq!(rt.trigger_progress(id), None);
    assert_eq!(rt.limit(), 800.0);
    assert!(!rt.kill_trigger(id));
}
