pub mod color;
pub mod export;
pub mod logo;
pub mod payload;
pub mod render;
pub mod validate;
