use super::*;
use crate::{
    foundation::core::Viewport,
    render::css::CssSurface,
    render::surface::ElementId,
    scroll::pin::PinOpts,
    session::runtime::RuntimeOpts,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn setup() -> (ScrollRuntime, HeroConfig) {
    let vp = Viewport::new(1280.0, 800.0).unwrap();
    let rt = ScrollRuntime::new(RuntimeOpts::new(vp, 1600.0)).unwrap();
    let cfg = HeroConfig {
        pin: PinOpts {
            scrub_secs: None,
            ..PinOpts::default()
        },
        ..HeroConfig::default()
    };
    (rt, cfg)
}

#[test]
fn mount_applies_the_first_frame() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();

    assert_eq!(handle.stats().frames, 1);
    assert_eq!(handle.stats().written, 10);
    assert_eq!(
        surface.property(ElementId::Logo, "opacity").as_deref(),
        Some("1")
    );
    assert_eq!(
        surface.property(ElementId::Heading2, "transform").as_deref(),
        Some("translate(-50%, -50%) scale(0.75)")
    );
    handle.unmount(&mut rt);
}

#[test]
fn scrolling_updates_the_surface() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();

    rt.frame(0.0);
    rt.scroll_to(3200.0, true);
    rt.frame(FRAME_MS);

    let stats = handle.stats();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.last_progress, Progress(1.0));
    assert_eq!(
        surface.property(ElementId::CubesContainer, "opacity").as_deref(),
        Some("1")
    );
    assert_eq!(
        surface.property(ElementId::Heading1, "transform").as_deref(),
        Some("translate(-50%, -50%) scale(1.5)")
    );
    let cube2 = surface.property(ElementId::Cube(1), "transform").unwrap();
    assert!(cube2.contains("rotateY(182deg)"), "{cube2}");
    handle.unmount(&mut rt);
}

#[test]
fn unmount_releases_the_trigger() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();
    assert_eq!(rt.registrations(), 1);

    let stats = handle.unmount(&mut rt);
    assert_eq!(rt.registrations(), 0);

    let writes = surface.writes();
    rt.frame(0.0);
    rt.scroll_to(1000.0, true);
    rt.frame(FRAME_MS);
    assert_eq!(surface.writes(), writes);
    assert_eq!(stats.frames, 1);
}

#[test]
fn remounting_is_leak_free() {
    let (mut rt, cfg) = setup();
    for _ in 0..3 {
        let h = HeroSection::mount(&mut rt, &cfg, CssSurface::with_all_elements(), 0.0).unwrap();
        h.unmount(&mut rt);
    }
    assert_eq!(rt.registrations(), 0);
}

#[test]
fn missing_named_element_fails_mount() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    surface.detach(ElementId::Logo);
    let err = HeroSection::mount(&mut rt, &cfg, surface, 0.0).unwrap_err();
    assert!(err.to_string().contains("surface error:"));
    assert_eq!(rt.registrations(), 0);
}

#[test]
fn missing_cube_is_skipped_until_it_appears() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    surface.detach(ElementId::Cube(3));
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();
    assert_eq!(handle.stats().skipped, 1);

    rt.frame(0.0);
    rt.scroll_to(800.0, true);
    rt.frame(FRAME_MS);
    assert_eq!(handle.stats().skipped, 2);
    assert_eq!(surface.property(ElementId::Cube(3), "top"), None);

    surface.attach(ElementId::Cube(3));
    rt.scroll_to(1600.0, true);
    rt.frame(2.0 * FRAME_MS);
    assert_eq!(handle.stats().skipped, 2);
    assert_eq!(
        surface.property(ElementId::Cube(3), "top").as_deref(),
        Some("75%")
    );
    handle.unmount(&mut rt);
}

#[test]
fn mount_on_shut_down_runtime_fails() {
    let (mut rt, cfg) = setup();
    rt.shutdown().unwrap();
    let surface = CssSurface::with_all_elements();
    let err = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap_err();
    assert!(err.to_string().contains("lifecycle error:"));
    assert_eq!(surface.writes(), 0);
    assert_eq!(surface.property(ElementId::Logo, "opacity"), None);
}

#[test]
fn cube_detached_while_mounted_counts_as_skipped() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();

    surface.detach(ElementId::Cube(2));
    let before = surface.writes();
    rt.frame(0.0);
    rt.scroll_to(800.0, true);
    rt.frame(FRAME_MS);

    let stats = handle.stats();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.written, 19);
    assert_eq!(stats.skipped, 1);
    assert_eq!(surface.writes() - before, 9);

    surface.attach(ElementId::Cube(2));
    rt.scroll_to(1600.0, true);
    rt.frame(2.0 * FRAME_MS);
    assert_eq!(handle.stats().skipped, 1);
    assert!(surface.property(ElementId::Cube(2), "transform").is_some());
    handle.unmount(&mut rt);
}

#[test]
fn dropped_handle_stops_writing_and_is_released() {
    let (mut rt, cfg) = setup();
    let surface = CssSurface::with_all_elements();
    let handle = HeroSection::mount(&mut rt, &cfg, surface.clone(), 0.0).unwrap();
    assert_eq!(rt.registrations(), 1);

    drop(handle);
    assert_eq!(rt.registrations(), 0);

    let writes = surface.writes();
    rt.frame(0.0);
    rt.scroll_to(1600.0, true);
    rt.frame(FRAME_MS);
    assert_eq!(surface.writes(), writes);
    assert_eq!(rt.registrations(), 0);
    assert_eq!(rt.limit(), 800.0);
}
