use crate::{
    eval::mapper::VisualState,
    foundation::error::{HeroError, HeroResult},
    scene::model::CUBE_COUNT,
};

/// Addressable hero element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    /// Block logo.
    Logo,
    /// Container holding every cube.
    CubesContainer,
    /// First heading.
    Heading1,
    /// Second heading with copy.
    Heading2,
    /// Cube by table index.
    Cube(usize),
}

impl ElementId {
    /// Elements that must resolve when binding a surface.
    pub const NAMED: [ElementId; 4] = [
        ElementId::Logo,
        ElementId::CubesContainer,
        ElementId::Heading1,
        ElementId::Heading2,
    ];

    /// DOM id used by the hero markup.
    pub fn dom_id(self) -> String {
        match self {
            Self::Logo => "hero-logo".to_string(),
            Self::CubesContainer => "hero-cubes".to_string(),
            Self::Heading1 => "hero-heading-1".to_string(),
            Self::Heading2 => "hero-heading-2".to_string(),
            Self::Cube(i) => format!("hero-cube-{}", i + 1),
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dom_id())
    }
}

/// Transform written to an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Centered on its anchor, uniformly scaled.
    Centered {
        /// Uniform scale.
        scale: f64,
    },
    /// Centered on its anchor, pushed in depth and rotated.
    Cube {
        /// Depth translation, px.
        z_px: f64,
        /// Degrees.
        rotate_x: f64,
        /// Degrees, including the second-phase spin.
        rotate_y: f64,
        /// Degrees.
        rotate_z: f64,
    },
}

/// Style properties written to one element for one frame. `None` leaves a property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Blur filter radius, px.
    pub blur_px: Option<f64>,
    /// Transform.
    pub transform: Option<Transform>,
    /// Top offset, percent.
    pub top_pct: Option<f64>,
    /// Left offset, percent.
    pub left_pct: Option<f64>,
}

/// Convert a frame's visual state into per-element style writes, named elements first.
pub fn styles_for(state: &VisualState) -> Vec<(ElementId, ElementStyle)> {
    let mut out = Vec::with_capacity(ElementId::NAMED.len() + state.cubes.len());
    out.push((
        ElementId::Logo,
        ElementStyle {
            opacity: Some(state.logo.opacity),
            blur_px: Some(state.logo.blur_px),
            ..ElementStyle::default()
        },
    ));
    out.push((
        ElementId::CubesContainer,
        ElementStyle {
            opacity: Some(state.cubes_container.opacity),
            ..ElementStyle::default()
        },
    ));
    for (id, h) in [
        (ElementId::Heading1, &state.heading_1),
        (ElementId::Heading2, &state.heading_2),
    ] {
        out.push((
            id,
            ElementStyle {
                opacity: Some(h.opacity),
                blur_px: Some(h.blur_px),
                transform: Some(Transform::Centered { scale: h.scale }),
                ..ElementStyle::default()
            },
        ));
    }
    for cube in &state.cubes {
        out.push((
            ElementId::Cube(cube.index),
            ElementStyle {
                transform: Some(Transform::Cube {
                    z_px: cube.pose.z,
                    rotate_x: cube.pose.rotate_x,
                    rotate_y: cube.rotate_y_total(),
                    rotate_z: cube.pose.rotate_z,
                }),
                top_pct: Some(cube.pose.top),
                left_pct: Some(cube.pose.left),
                ..ElementStyle::default()
            },
        ));
    }
    out
}

/// Something visual state can be written to.
///
/// The mapper never touches a surface; [`SurfaceBinding`] does the writes, so surfaces can be
/// swapped (DOM, in-memory CSS document, test recorder) without touching the animation logic.
pub trait RenderSurface {
    /// Resolved element reference.
    type Handle: Clone;

    /// Look up an element. `None` when it is not (yet) present.
    fn resolve(&mut self, element: ElementId) -> Option<Self::Handle>;

    /// Write one element's style. Returns `false` when the handle no longer refers to a live
    /// element and nothing was written.
    fn write(&mut self, handle: &Self::Handle, style: &ElementStyle) -> bool;
}

/// Outcome of applying one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ApplyReport {
    /// Elements written.
    pub written: usize,
    /// Elements skipped because their handle did not resolve.
    pub skipped: usize,
}

/// A surface plus the element handles resolved for it.
pub struct SurfaceBinding<S: RenderSurface> {
    surface: S,
    named: Vec<(ElementId, S::Handle)>,
    cubes: Vec<Option<S::Handle>>,
}

impl<S: RenderSurface> std::fmt::Debug for SurfaceBinding<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceBinding")
            .field("named", &self.named.len())
            .field(
                "cubes_resolved",
                &self.cubes.iter().filter(|c| c.is_some()).count(),
            )
            .finish()
    }
}

impl<S: RenderSurface> SurfaceBinding<S> {
    /// Resolve every named element (required) and every cube (optional).
    pub fn bind(mut surface: S) -> HeroResult<Self> {
        let mut named = Vec::with_capacity(ElementId::NAMED.len());
        for id in ElementId::NAMED {
            let handle = surface.resolve(id).ok_or_else(|| {
                HeroError::surface(format!("required element '{id}' is missing"))
            })?;
            named.push((id, handle));
        }
        let cubes = (0..CUBE_COUNT)
            .map(|i| surface.resolve(ElementId::Cube(i)))
            .collect();
        Ok(Self {
            surface,
            named,
            cubes,
        })
    }

    /// Number of cube handles currently resolved.
    pub fn resolved_cubes(&self) -> usize {
        self.cubes.iter().filter(|c| c.is_some()).count()
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Write a frame. Cubes whose handle is still missing are resolved again and skipped for
    /// this frame if that fails. A cube whose write is rejected counts as skipped and its handle
    /// is dropped so the next frame resolves it again.
    pub fn apply(&mut self, state: &VisualState) -> ApplyReport {
        let mut report = ApplyReport::default();
        for (id, style) in styles_for(state) {
            let handle = match id {
                ElementId::Cube(i) => {
                    let Some(slot) = self.cubes.get_mut(i) else {
                        tracing::trace!(cube = i, "no slot for cube; skipping");
                        report.skipped += 1;
                        continue;
                    };
                    if slot.is_none() {
                        *slot = self.surface.resolve(id);
                    }
                    match slot {
                        Some(h) => h.clone(),
                        None => {
                            tracing::trace!(cube = i, "cube handle unresolved; skipping frame");
                            report.skipped += 1;
                            continue;
                        }
                    }
                }
                _ => match self.named.iter().find(|(n, _)| *n == id) {
                    Some((_, h)) => h.clone(),
                    None => {
                        report.skipped += 1;
                        continue;
                    }
                },
            };
            if self.surface.write(&handle, &style) {
                report.written += 1;
                continue;
            }
            report.skipped += 1;
            if let ElementId::Cube(i) = id {
                tracing::trace!(cube = i, "cube handle went stale; resolving again next frame");
                if let Some(slot) = self.cubes.get_mut(i) {
                    *slot = None;
                }
            } else {
                tracing::trace!(%id, "named element write dropped");
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
