use super::*;

#[test]
fn default_table_is_valid_and_ordered() {
    let table = CubeTable::default();
    table.validate().unwrap();
    let keys: Vec<&str> = table.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["cube1", "cube2", "cube3", "cube4", "cube5", "cube6"]);
}

#[test]
fn default_table_spins_only_cube2_and_cube4() {
    let table = CubeTable::default();
    for cube in &table {
        let expected = match cube.key.as_str() {
            "cube2" => 180.0,
            "cube4" => -180.0,
            _ => 0.0,
        };
        assert_eq!(cube.spin_y_deg, expected, "{}", cube.key);
    }
}

#[test]
fn table_rejects_wrong_count() {
    let mut cubes: Vec<CubeDescriptor> = CubeTable::default().iter().cloned().collect();
    cubes.pop();
    let err = CubeTable::new(cubes).unwrap_err();
    assert!(err.to_string().contains("expected 6 cubes"));
}

#[test]
fn table_rejects_duplicate_keys() {
    let mut cubes: Vec<CubeDescriptor> = CubeTable::default().iter().cloned().collect();
    cubes[5].key = "cube1".to_string();
    let err = CubeTable::new(cubes).unwrap_err();
    assert!(err.to_string().contains("duplicate cube key 'cube1'"));
}

#[test]
fn table_rejects_non_finite_pose() {
    let mut cubes: Vec<CubeDescriptor> = CubeTable::default().iter().cloned().collect();
    cubes[2].final_pose.z = f64::INFINITY;
    assert!(CubeTable::new(cubes).is_err());
}

#[test]
fn descriptor_json_uses_final_and_camel_case() {
    let json = r#"{
        "key": "cubeX",
        "initial": { "top": 1, "left": 2, "rotateX": 3, "rotateY": 4, "rotateZ": 5, "z": 6 },
        "final": { "top": 7, "left": 8, "rotateX": 9, "rotateY": 10, "rotateZ": 11, "z": 12 }
    }"#;
    let d: CubeDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(d.initial.rotate_y, 4.0);
    assert_eq!(d.final_pose.z, 12.0);
    assert_eq!(d.spin_y_deg, 0.0);
}

#[test]
fn default_timeline_matches_staging() {
    let t = Timeline::default();
    t.validate().unwrap();
    assert!((t.logo_blur.end() - 0.05).abs() < 1e-12);
    assert!((t.cubes_fade.end() - 0.02).abs() < 1e-12);
    assert!((t.heading_1.end() - 0.4).abs() < 1e-12);
    assert!((t.cube_phase_1.end() - 0.5).abs() < 1e-12);
    assert!((t.cube_phase_2.end() - 1.0).abs() < 1e-12);
}

#[test]
fn timeline_rejects_negative_blur_and_zero_scale() {
    let t = Timeline {
        heading_2_blur_px: Span::new(-1.0, 0.0),
        ..Timeline::default()
    };
    assert!(t.validate().is_err());

    let t = Timeline {
        heading_1_scale: Span::new(0.0, 1.5),
        ..Timeline::default()
    };
    assert!(t.validate().is_err());
}

#[test]
fn partial_timeline_json_fills_defaults() {
    let t: Timeline = serde_json::from_str(r#"{ "heading_2": { "start": 0.3, "rate": 5 } }"#)
        .unwrap();
    assert_eq!(t.heading_2, Window::new(0.3, 5.0));
    assert_eq!(t.logo_blur, Timeline::default().logo_blur);
}
