//! Output types from the layout engine.

use crate::PositionedElement;
use facture_types::ImageResource;
use std::collections::HashMap;

/// The result of laying out a single invoice: positioned elements organized
/// by page, plus the image resources they reference.
pub struct LaidOutInvoice {
    pub pages: Vec<Vec<PositionedElement>>,
    pub resources: HashMap<String, ImageResource>,
}

impl LaidOutInvoice {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
