pub mod champion;
pub mod image;
