pub mod color;
pub mod geometry;
pub mod resource;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use resource::ImageResource;
