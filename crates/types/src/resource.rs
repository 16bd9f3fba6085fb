use std::sync::Arc;

/// A decoded raster image shared between the layout engine and the render
/// backend. Pixel data is tightly packed 8-bit RGB, row-major.
#[derive(Debug, Clone)]
pub struct ImageResource {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub rgb: Arc<Vec<u8>>,
}

impl ImageResource {
    pub fn new(pixel_width: u32, pixel_height: u32, rgb: Vec<u8>) -> Self {
        Self { pixel_width, pixel_height, rgb: Arc::new(rgb) }
    }

    /// Width-over-height ratio, used to scale the placed box without
    /// distorting the source raster.
    pub fn aspect_ratio(&self) -> f32 {
        if self.pixel_height == 0 {
            1.0
        } else {
            self.pixel_width as f32 / self.pixel_height as f32
        }
    }
}
