use super::*;

const EPS: f64 = 1e-9;

fn state(p: f64) -> VisualState {
    compute_visual_state(&CubeTable::default(), &Timeline::default(), Progress::new(p))
}

fn cube<'a>(s: &'a VisualState, key: &str) -> &'a CubeVisual {
    s.cubes.iter().find(|c| c.key == key).unwrap()
}

#[test]
fn start_of_pin_is_the_resting_hero() {
    let s = state(0.0);
    assert_eq!(s.logo.opacity, 1.0);
    assert_eq!(s.logo.blur_px, 0.0);
    assert_eq!(s.cubes_container.opacity, 0.0);
    assert_eq!(s.heading_1.opacity, 1.0);
    assert_eq!(s.heading_1.scale, 1.0);
    assert_eq!(s.heading_2.opacity, 0.0);
    assert_eq!(s.heading_2.scale, 0.75);
    assert_eq!(s.heading_2.blur_px, 10.0);
}

#[test]
fn end_of_pin_is_the_settled_scene() {
    let s = state(1.0);
    assert_eq!(s.logo.opacity, 0.0);
    assert_eq!(s.cubes_container.opacity, 1.0);
    assert_eq!(s.heading_1.opacity, 0.0);
    assert_eq!(s.heading_1.scale, 1.5);
    assert_eq!(s.heading_2.opacity, 1.0);
    assert_eq!(s.heading_2.scale, 1.0);
    assert_eq!(cube(&s, "cube2").spin_y_deg, 180.0);
    assert_eq!(cube(&s, "cube4").spin_y_deg, -180.0);
    assert_eq!(cube(&s, "cube1").spin_y_deg, 0.0);
}

#[test]
fn logo_blur_saturates_at_five_percent() {
    assert!((state(0.025).logo.blur_px - 10.0).abs() < EPS);
    assert_eq!(state(0.05).logo.blur_px, 20.0);
    assert_eq!(state(0.3).logo.blur_px, 20.0);
}

#[test]
fn logo_fades_between_two_and_three_percent() {
    assert_eq!(state(0.02).logo.opacity, 1.0);
    assert!((state(0.025).logo.opacity - 0.5).abs() < 1e-6);
    assert_eq!(state(0.04).logo.opacity, 0.0);
}

#[test]
fn heading_1_follows_its_window() {
    let s = state(0.2);
    assert!((s.heading_1.scale - 1.25).abs() < EPS);
    assert!((s.heading_1.blur_px - 10.0).abs() < EPS);
    assert!((s.heading_1.opacity - 0.5).abs() < EPS);
}

#[test]
fn cubes_are_at_initial_pose_at_start_and_final_pose_at_half() {
    let table = CubeTable::default();
    let start = state(0.0);
    let half = state(0.5);
    for (d, (s, h)) in table.iter().zip(start.cubes.iter().zip(half.cubes.iter())) {
        assert_eq!(s.pose, d.initial, "{}", d.key);
        assert_eq!(h.pose, d.final_pose, "{}", d.key);
        assert_eq!(s.spin_y_deg, 0.0);
        assert_eq!(h.spin_y_deg, 0.0);
    }
}

#[test]
fn extra_spin_only_in_second_half() {
    assert_eq!(cube(&state(0.49), "cube2").spin_y_deg, 0.0);
    assert!((cube(&state(0.75), "cube2").spin_y_deg - 90.0).abs() < EPS);
    assert!((cube(&state(0.75), "cube4").spin_y_deg + 90.0).abs() < EPS);
    assert_eq!(cube(&state(0.75), "cube5").spin_y_deg, 0.0);
}

#[test]
fn total_y_rotation_adds_spin_to_pose() {
    let s = state(1.0);
    let c2 = cube(&s, "cube2");
    assert_eq!(c2.rotate_y_total(), c2.pose.rotate_y + 180.0);
}

#[test]
fn cubes_keep_table_order_and_index() {
    let s = state(0.3);
    for (i, c) in s.cubes.iter().enumerate() {
        assert_eq!(c.index, i);
        assert_eq!(c.key, format!("cube{}", i + 1));
    }
}

#[test]
fn cubes_container_ramps_between_one_and_two_percent() {
    assert!(state(0.01).cubes_container.opacity.abs() < EPS);
    assert!((state(0.015).cubes_container.opacity - 0.5).abs() < 1e-6);
    assert!((state(0.02).cubes_container.opacity - 1.0).abs() < EPS);
    assert_eq!(state(0.005).cubes_container.opacity, 0.0);
}

#[test]
fn heading_2_opens_between_forty_and_fifty_percent() {
    let open = state(0.4);
    assert!((open.heading_2.scale - 0.75).abs() < EPS);
    assert!(open.heading_2.opacity.abs() < EPS);
    assert!((open.heading_2.blur_px - 10.0).abs() < EPS);

    let mid = state(0.45);
    assert!((mid.heading_2.scale - 0.875).abs() < 1e-6);
    assert!((mid.heading_2.opacity - 0.5).abs() < 1e-6);
    assert!((mid.heading_2.blur_px - 5.0).abs() < 1e-6);

    let done = state(0.5);
    assert!((done.heading_2.scale - 1.0).abs() < EPS);
    assert!((done.heading_2.opacity - 1.0).abs() < EPS);
    assert!(done.heading_2.blur_px.abs() < EPS);
}
