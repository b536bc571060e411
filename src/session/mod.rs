pub mod hero;
pub mod runtime;
