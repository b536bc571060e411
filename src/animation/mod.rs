pub mod anim;
pub mod ease;
