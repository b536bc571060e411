use super::*;
use crate::{
    eval::mapper::compute_visual_state,
    foundation::core::Progress,
    scene::model::{CubeTable, Timeline},
};

fn html() -> String {
    let s = compute_visual_state(&CubeTable::default(), &Timeline::default(), Progress::START);
    render_hero_html(&s, &HeroCopy::default(), "/images").unwrap()
}

#[test]
fn every_addressable_element_has_its_id() {
    let html = html();
    for id in ElementId::NAMED {
        assert!(html.contains(&format!("id=\"{}\"", id.dom_id())), "{id}");
    }
    for i in 0..6 {
        assert!(html.contains(&format!("id=\"hero-cube-{}\"", i + 1)));
    }
}

#[test]
fn faces_use_naming_scheme_and_loading_hints() {
    let html = html();
    assert_eq!(html.matches("<img ").count(), 36);
    assert!(html.contains(
        "<div class=\"front\"><img class=\"i\" src=\"/images/cube1img1.jpg\" alt=\"Cube 1 Face 1\" loading=\"eager\" fetchpriority=\"high\"></div>"
    ));
    assert!(html.contains(
        "<div class=\"bottom\"><img class=\"i\" src=\"/images/cube6img6.jpg\" alt=\"Cube 6 Face 6\" loading=\"lazy\" fetchpriority=\"auto\"></div>"
    ));
}

#[test]
fn logo_has_six_blocks() {
    let html = html();
    for n in 1..=6 {
        assert!(html.contains(&format!("block block{n}\"")));
    }
}

#[test]
fn initial_frame_is_inlined() {
    let html = html();
    assert!(html.contains("id=\"hero-cubes\" style=\"opacity: 0;\""));
    assert!(html.contains(
        "id=\"hero-heading-2\" style=\"transform: translate(-50%, -50%) scale(0.75); filter: blur(10px); opacity: 0;\""
    ));
}

#[test]
fn copy_is_escaped() {
    let s = compute_visual_state(&CubeTable::default(), &Timeline::default(), Progress::START);
    let copy = HeroCopy {
        heading: "<b>A & B</b>".to_string(),
        ..HeroCopy::default()
    };
    let html = render_hero_html(&s, &copy, "/img").unwrap();
    assert!(html.contains("<h1>&lt;b&gt;A &amp; B&lt;/b&gt;</h1>"));
}
