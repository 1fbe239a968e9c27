pub mod decode;
pub mod icons;
