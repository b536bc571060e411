use crate::foundation::error::{HeroError, HeroResult};
use crate::scene::model::CUBE_COUNT;

/// Faces per cube.
pub const FACE_COUNT: usize = 6;

/// Cubes whose faces load eagerly; the rest load lazily.
pub const EAGER_CUBES: usize = 3;

/// Cube face, in the fixed order used by asset face indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Face 1.
    Front,
    /// Face 2.
    Back,
    /// Face 3.
    Right,
    /// Face 4.
    Left,
    /// Face 5.
    Top,
    /// Face 6.
    Bottom,
}

impl Face {
    /// All faces in asset order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Face for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Semantic class name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Right => "right",
            Self::Left => "left",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Loading hint for the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPriority {
    /// Load immediately at high priority.
    Eager,
    /// Defer until needed.
    Lazy,
}

impl LoadPriority {
    /// Value of the HTML `loading` attribute.
    pub fn loading_attr(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }

    /// Value of the HTML `fetchpriority` attribute.
    pub fn fetch_priority_attr(self) -> &'static str {
        match self {
            Self::Eager => "high",
            Self::Lazy => "auto",
        }
    }
}

/// Addressing of one cube face image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FaceAsset {
    /// 1-based cube number.
    pub cube: usize,
    /// 1-based face number.
    pub face_index: usize,
    /// Semantic face.
    pub face: Face,
    /// Asset key, `cube{N}img{F}`.
    pub key: String,
    /// Image source path.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Loading hint.
    pub priority: LoadPriority,
}

/// Asset for 1-based `cube` and `face`, with images served from `base`.
pub fn face_asset(base: &str, cube: usize, face_index: usize) -> HeroResult<FaceAsset> {
    if !(1..=CUBE_COUNT).contains(&cube) {
        return Err(HeroError::validation(format!(
            "cube number must be in 1..={CUBE_COUNT}, got {cube}"
        )));
    }
    let face = (1..=FACE_COUNT)
        .contains(&face_index)
        .then(|| Face::from_index(face_index - 1))
        .flatten()
        .ok_or_else(|| {
            HeroError::validation(format!(
                "face number must be in 1..={FACE_COUNT}, got {face_index}"
            ))
        })?;

    let key = format!("cube{cube}img{face_index}");
    let base = base.trim_end_matches('/');
    Ok(FaceAsset {
        cube,
        face_index,
        face,
        src: format!("{base}/{key}.jpg"),
        alt: format!("Cube {cube} Face {face_index}"),
        key,
        priority: if cube <= EAGER_CUBES {
            LoadPriority::Eager
        } else {
            LoadPriority::Lazy
        },
    })
}

/// Every face asset, cube-major then face-minor.
pub fn asset_manifest(base: &str) -> Vec<FaceAsset> {
    (1..=CUBE_COUNT)
        .flat_map(|cube| (1..=FACE_COUNT).map(move |face| (cube, face)))
        .filter_map(|(cube, face)| face_asset(base, cube, face).ok())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
