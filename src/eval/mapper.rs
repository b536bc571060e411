use crate::{
    animation::anim::{Lerp, lerp},
    foundation::core::Progress,
    scene::model::{CubePose, CubeTable, Timeline},
};

/// Logo state: blurs out first, then fades.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogoVisual {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Blur radius in px, `>= 0`.
    pub blur_px: f64,
}

/// Cubes container state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContainerVisual {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Heading state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeadingVisual {
    /// Uniform scale, `> 0`.
    pub scale: f64,
    /// Blur radius in px, `>= 0`.
    pub blur_px: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// One cube's state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CubeVisual {
    /// Descriptor key.
    pub key: String,
    /// Position in the cube table.
    pub index: usize,
    /// Pose after the first phase (repositioning).
    pub pose: CubePose,
    /// Extra Y rotation from the second phase, degrees.
    pub spin_y_deg: f64,
}

impl CubeVisual {
    /// Y rotation including the second-phase spin.
    pub fn rotate_y_total(&self) -> f64 {
        self.pose.rotate_y + self.spin_y_deg
    }
}

/// Everything the hero renders for one frame.
///
/// Fully recomputed from progress each frame; nothing carries over between frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    /// Progress this state was computed for.
    pub progress: f64,
    /// Logo.
    pub logo: LogoVisual,
    /// Cubes container.
    pub cubes_container: ContainerVisual,
    /// First heading.
    pub heading_1: HeadingVisual,
    /// Second heading.
    pub heading_2: HeadingVisual,
    /// Cubes in table order.
    pub cubes: Vec<CubeVisual>,
}

/// Compute the visual state of every hero element at `progress`.
///
/// Pure: the same inputs always produce the same output. Progress outside `[0, 1]` (or NaN) is
/// absorbed by the timeline windows, so opacity stays in `[0, 1]` and blur/scale stay within
/// their configured ranges.
#[tracing::instrument(level = "trace", skip(cubes, timeline))]
pub fn compute_visual_state(
    cubes: &CubeTable,
    timeline: &Timeline,
    progress: Progress,
) -> VisualState {
    let logo_blur = timeline.logo_blur.local(progress);
    let logo_fade = timeline.logo_fade.local(progress);
    let cubes_fade = timeline.cubes_fade.local(progress);
    let h1 = timeline.heading_1.local(progress);
    let h2 = timeline.heading_2.local(progress);
    let phase_1 = timeline.cube_phase_1.local(progress);
    let phase_2 = timeline.cube_phase_2.local(progress);

    let cubes = cubes
        .iter()
        .enumerate()
        .map(|(index, d)| CubeVisual {
            key: d.key.clone(),
            index,
            pose: CubePose::lerp(&d.initial, &d.final_pose, phase_1),
            spin_y_deg: lerp(0.0, d.spin_y_deg, phase_2),
        })
        .collect();

    VisualState {
        progress: progress.get(),
        logo: LogoVisual {
            opacity: 1.0 - logo_fade,
            blur_px: timeline.logo_blur_px.at(logo_blur),
        },
        cubes_container: ContainerVisual {
            opacity: cubes_fade,
        },
        heading_1: HeadingVisual {
            scale: timeline.heading_1_scale.at(h1),
            blur_px: timeline.heading_1_blur_px.at(h1),
            opacity: 1.0 - h1,
        },
        heading_2: HeadingVisual {
            scale: timeline.heading_2_scale.at(h2),
            blur_px: timeline.heading_2_blur_px.at(h2),
            opacity: h2,
        },
        cubes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/mapper.rs"]
mod tests;
