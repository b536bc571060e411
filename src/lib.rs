//! pinned-hero drives a scroll-pinned landing hero.
//!
//! A section stays pinned for four viewport heights of scrolling while a layered animation
//! plays: the block logo blurs and fades, the headline grows and dissolves, six cubes fly in
//! from deep behind the viewport, and two of them flip once the grid has settled.
//!
//! # Frame pipeline
//!
//! 1. **Smooth scroll**: raw wheel/programmatic input moves a target; [`SmoothScroll`] eases
//!    the position toward it every frame.
//! 2. **Pin**: [`PinController`] maps the eased position to [`Progress`] in `[0, 1]`.
//! 3. **Map**: [`compute_visual_state`] turns progress into a [`VisualState`]. It is pure.
//! 4. **Apply**: [`SurfaceBinding`] writes the state to a [`RenderSurface`].
//!
//! [`ScrollRuntime`] owns steps 1 and 2 for the whole application; [`HeroSection::mount`] wires
//! steps 3 and 4 to it and [`HeroHandle::unmount`] tears them down.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod eval;
mod foundation;
mod render;
mod scene;
mod scroll;
mod session;

pub use animation::anim::{Lerp, Span, Window, lerp};
pub use animation::ease::{Ease, damp};
pub use assets::naming::{
    EAGER_CUBES, FACE_COUNT, Face, FaceAsset, LoadPriority, asset_manifest, face_asset,
};
pub use eval::mapper::{
    ContainerVisual, CubeVisual, HeadingVisual, LogoVisual, VisualState, compute_visual_state,
};
pub use foundation::core::{Progress, Viewport};
pub use foundation::error::{HeroError, HeroResult};
pub use render::css::{
    CssDocument, CssSurface, css_number, declarations, inline_style, transform_value,
};
pub use render::markup::{HeroCopy, render_hero_html};
pub use render::surface::{
    ApplyReport, ElementId, ElementStyle, RenderSurface, SurfaceBinding, Transform, styles_for,
};
pub use scene::config::HeroConfig;
pub use scene::model::{CUBE_COUNT, CubeDescriptor, CubePose, CubeTable, Timeline};
pub use scroll::pin::{PinController, PinOpts, PinSpec, PinState, PinUpdate};
pub use scroll::smooth::{Motion, ScrollEvent, SmoothScroll, SmoothScrollOpts};
pub use scroll::ticker::{CallbackId, FrameTick, Ticker, TickerOpts};
pub use session::hero::{HeroHandle, HeroSection, HeroStats};
pub use session::runtime::{
    RuntimeOpts, ScrollRuntime, TriggerId, plugins_registered, register_plugins,
};
