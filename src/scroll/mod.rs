pub mod pin;
pub mod smooth;
pub mod ticker;
