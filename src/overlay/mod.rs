pub mod bars;
pub mod direction;
pub mod geometry;
pub mod renderer;
pub mod sampler;
