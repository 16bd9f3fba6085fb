use serde::{Deserialize, Serialize};

/// Fixed page geometry. All sections draw inside the box left after the
/// outer margin is subtracted from both sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// ISO A4 portrait in PostScript points, 40pt outer margin.
    pub fn a4() -> Self {
        Self { width: 595.28, height: 841.89, margin: 40.0 }
    }

    /// Horizontal space available to every section.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Right edge of the printable area.
    pub fn content_right(&self) -> f32 {
        self.width - self.margin
    }
}
