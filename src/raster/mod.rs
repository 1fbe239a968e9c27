pub mod draw;
pub mod resize;
