pub mod masked;
pub mod saliency;
