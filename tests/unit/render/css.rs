use super::*;

#[test]
fn numbers_are_trimmed() {
    assert_eq!(css_number(20.0), "20");
    assert_eq!(css_number(0.75), "0.75");
    assert_eq!(css_number(-0.0), "0");
    assert_eq!(css_number(-0.00001), "0");
    assert_eq!(css_number(0.30000000000000004), "0.3");
    assert_eq!(css_number(-30000.0), "-30000");
}

#[test]
fn transforms_match_page_syntax() {
    assert_eq!(
        transform_value(&Transform::Centered { scale: 1.5 }),
        "translate(-50%, -50%) scale(1.5)"
    );
    assert_eq!(
        transform_value(&Transform::Cube {
            z_px: -30000.0,
            rotate_x: 360.0,
            rotate_y: -180.0,
            rotate_z: 0.0,
        }),
        "translate3d(-50%, -50%, -30000px) rotateX(360deg) rotateY(-180deg) rotateZ(0deg)"
    );
}

#[test]
fn declarations_are_in_stable_order() {
    let style = ElementStyle {
        opacity: Some(0.5),
        blur_px: Some(4.0),
        transform: Some(Transform::Centered { scale: 1.0 }),
        top_pct: Some(25.0),
        left_pct: Some(75.0),
    };
    assert_eq!(
        inline_style(&style),
        "top: 25%; left: 75%; transform: translate(-50%, -50%) scale(1); filter: blur(4px); opacity: 0.5;"
    );
    assert_eq!(inline_style(&ElementStyle::default()), "");
}

#[test]
fn surface_resolves_only_attached_elements() {
    let mut s = CssSurface::default();
    assert_eq!(s.resolve(ElementId::Logo), None);
    s.attach(ElementId::Logo);
    assert_eq!(s.resolve(ElementId::Logo), Some(ElementId::Logo));
}

#[test]
fn clones_share_one_document() {
    let mut s = CssSurface::with_all_elements();
    let observer = s.clone();
    let h = s.resolve(ElementId::Heading2).unwrap();
    s.write(
        &h,
        &ElementStyle {
            opacity: Some(1.0),
            ..ElementStyle::default()
        },
    );
    assert_eq!(
        observer.property(ElementId::Heading2, "opacity").as_deref(),
        Some("1")
    );
    assert_eq!(observer.style_text(ElementId::Heading2), "opacity: 1;");
    assert_eq!(observer.writes(), 1);
}

#[test]
fn writes_to_detached_elements_are_dropped() {
    let mut s = CssSurface::with_all_elements();
    let h = s.resolve(ElementId::Cube(0)).unwrap();
    s.detach(ElementId::Cube(0));
    let written = s.write(
        &h,
        &ElementStyle {
            top_pct: Some(1.0),
            ..ElementStyle::default()
        },
    );
    assert!(!written);
    assert_eq!(s.writes(), 0);
    assert_eq!(s.property(ElementId::Cube(0), "top"), None);
}
