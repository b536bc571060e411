use crate::{
    animation::anim::{Span, Window},
    foundation::error::{HeroError, HeroResult},
};

/// Number of cubes in the hero grid.
pub const CUBE_COUNT: usize = 6;

/// Position and orientation of one cube.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CubePose {
    /// Vertical position, percent of the cubes container.
    pub top: f64,
    /// Horizontal position, percent of the cubes container.
    pub left: f64,
    /// Rotation around X, degrees.
    pub rotate_x: f64,
    /// Rotation around Y, degrees.
    pub rotate_y: f64,
    /// Rotation around Z, degrees.
    pub rotate_z: f64,
    /// Depth translation, pixels.
    pub z: f64,
}

impl CubePose {
    fn is_finite(&self) -> bool {
        [
            self.top,
            self.left,
            self.rotate_x,
            self.rotate_y,
            self.rotate_z,
            self.z,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Immutable animation data for one cube.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubeDescriptor {
    /// Stable key (`cube1` .. `cube6`).
    pub key: String,
    /// Pose at progress 0.
    pub initial: CubePose,
    /// Pose once the first phase completes.
    #[serde(rename = "final")]
    pub final_pose: CubePose,
    /// Extra Y rotation (degrees) reached at the end of the second phase.
    #[serde(default)]
    pub spin_y_deg: f64,
}

/// Cube descriptors in their stable insertion order.
///
/// The order doubles as the index used to address cube handles on the render surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CubeTable {
    cubes: Vec<CubeDescriptor>,
}

impl CubeTable {
    /// Build a table from descriptors; the result is validated.
    pub fn new(cubes: Vec<CubeDescriptor>) -> HeroResult<Self> {
        let table = Self { cubes };
        table.validate()?;
        Ok(table)
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CubeDescriptor> {
        self.cubes.iter()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Whether the table has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Look up a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&CubeDescriptor> {
        self.cubes.iter().find(|c| c.key == key)
    }

    /// Exactly [`CUBE_COUNT`] cubes with unique, non-empty keys and finite poses.
    pub fn validate(&self) -> HeroResult<()> {
        if self.cubes.len() != CUBE_COUNT {
            return Err(HeroError::validation(format!(
                "expected {CUBE_COUNT} cubes, found {}",
                self.cubes.len()
            )));
        }
        let mut seen = std::collections::BTreeSet::new();
        for cube in &self.cubes {
            if cube.key.trim().is_empty() {
                return Err(HeroError::validation("cube key must be non-empty"));
            }
            if !seen.insert(cube.key.as_str()) {
                return Err(HeroError::validation(format!(
                    "duplicate cube key '{}'",
                    cube.key
                )));
            }
            if !cube.initial.is_finite() || !cube.final_pose.is_finite() {
                return Err(HeroError::validation(format!(
                    "cube '{}' has a non-finite pose value",
                    cube.key
                )));
            }
            if !cube.spin_y_deg.is_finite() {
                return Err(HeroError::validation(format!(
                    "cube '{}' spin must be finite",
                    cube.key
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CubeTable {
    type Item = &'a CubeDescriptor;
    type IntoIter = std::slice::Iter<'a, CubeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.iter()
    }
}

fn pose(top: f64, left: f64, rotate_x: f64, rotate_y: f64, rotate_z: f64, z: f64) -> CubePose {
    CubePose {
        top,
        left,
        rotate_x,
        rotate_y,
        rotate_z,
        z,
    }
}

fn cube(key: &str, initial: CubePose, final_pose: CubePose, spin_y_deg: f64) -> CubeDescriptor {
    CubeDescriptor {
        key: key.to_string(),
        initial,
        final_pose,
        spin_y_deg,
    }
}

impl Default for CubeTable {
    /// The landing page's grid: cubes fall in from far behind the viewport and settle into two
    /// loose rows; `cube2` and `cube4` flip in opposite directions afterwards.
    fn default() -> Self {
        Self {
            cubes: vec![
                cube(
                    "cube1",
                    pose(-55.0, 37.5, 360.0, -360.0, -48.0, -30000.0),
                    pose(50.0, 15.0, 0.0, 3.0, 0.0, 0.0),
                    0.0,
                ),
                cube(
                    "cube2",
                    pose(-35.0, 32.5, -360.0, 360.0, 90.0, -30000.0),
                    pose(75.0, 25.0, 1.0, 2.0, 0.0, 0.0),
                    180.0,
                ),
                cube(
                    "cube3",
                    pose(-65.0, 50.0, -360.0, -360.0, -180.0, -30000.0),
                    pose(25.0, 25.0, -1.0, 2.0, 0.0, 0.0),
                    0.0,
                ),
                cube(
                    "cube4",
                    pose(-35.0, 50.0, -360.0, -360.0, -180.0, -30000.0),
                    pose(75.0, 75.0, 1.0, -2.0, 0.0, 0.0),
                    -180.0,
                ),
                cube(
                    "cube5",
                    pose(-55.0, 62.5, 360.0, 360.0, -135.0, -30000.0),
                    pose(25.0, 75.0, -1.0, -2.0, 0.0, 0.0),
                    0.0,
                ),
                cube(
                    "cube6",
                    pose(-35.0, 67.5, -180.0, -360.0, -180.0, -30000.0),
                    pose(50.0, 85.0, 0.0, -3.0, 0.0, 0.0),
                    0.0,
                ),
            ],
        }
    }
}

/// Staging of every animated thread over the pinned distance.
///
/// Each thread opens over its own window of global progress; the windows overlap to give a
/// layered reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeline {
    /// Logo blur window.
    pub logo_blur: Window,
    /// Logo blur radius range, px.
    pub logo_blur_px: Span,
    /// Logo fade-out window.
    pub logo_fade: Window,
    /// Cubes container fade-in window.
    pub cubes_fade: Window,
    /// First heading window (scale, blur, fade-out).
    pub heading_1: Window,
    /// First heading scale range.
    pub heading_1_scale: Span,
    /// First heading blur range, px.
    pub heading_1_blur_px: Span,
    /// Second heading window (scale, blur, fade-in).
    pub heading_2: Window,
    /// Second heading scale range.
    pub heading_2_scale: Span,
    /// Second heading blur range, px.
    pub heading_2_blur_px: Span,
    /// Cube repositioning window.
    pub cube_phase_1: Window,
    /// Cube extra spin window.
    pub cube_phase_2: Window,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            logo_blur: Window::new(0.0, 20.0),
            logo_blur_px: Span::new(0.0, 20.0),
            logo_fade: Window::new(0.02, 100.0),
            cubes_fade: Window::new(0.01, 100.0),
            heading_1: Window::new(0.0, 2.5),
            heading_1_scale: Span::new(1.0, 1.5),
            heading_1_blur_px: Span::new(0.0, 20.0),
            heading_2: Window::new(0.4, 10.0),
            heading_2_scale: Span::new(0.75, 1.0),
            heading_2_blur_px: Span::new(10.0, 0.0),
            cube_phase_1: Window::new(0.0, 2.0),
            cube_phase_2: Window::new(0.5, 2.0),
        }
    }
}

impl Timeline {
    /// Windows must be well-formed; blur ranges non-negative; scale ranges strictly positive.
    pub fn validate(&self) -> HeroResult<()> {
        for (name, w) in [
            ("logo_blur", &self.logo_blur),
            ("logo_fade", &self.logo_fade),
            ("cubes_fade", &self.cubes_fade),
            ("heading_1", &self.heading_1),
            ("heading_2", &self.heading_2),
            ("cube_phase_1", &self.cube_phase_1),
            ("cube_phase_2", &self.cube_phase_2),
        ] {
            w.validate(name)?;
        }

        for (name, s) in [
            ("logo_blur_px", &self.logo_blur_px),
            ("heading_1_blur_px", &self.heading_1_blur_px),
            ("heading_2_blur_px", &self.heading_2_blur_px),
        ] {
            if !s.is_finite() || s.min() < 0.0 {
                return Err(HeroError::validation(format!(
                    "span '{name}' must be finite and >= 0"
                )));
            }
        }

        for (name, s) in [
            ("heading_1_scale", &self.heading_1_scale),
            ("heading_2_scale", &self.heading_2_scale),
        ] {
            if !s.is_finite() || s.min() <= 0.0 {
                return Err(HeroError::validation(format!(
                    "span '{name}' must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
