pub mod css;
pub mod markup;
pub mod surface;
