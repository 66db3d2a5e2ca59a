pub mod input;
pub mod normalize;
pub mod render;
