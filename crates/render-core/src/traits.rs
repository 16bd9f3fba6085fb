use crate::error::RenderError;
use facture_layout::PositionedElement;
use facture_types::ImageResource;
use std::collections::HashMap;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// The call sequence is `begin_document`, `add_resources` once, then
/// `render_page` per laid-out page, then `finish` to obtain the bytes.
pub trait DocumentRenderer {
    fn begin_document(&mut self) -> Result<(), RenderError>;

    fn add_resources(
        &mut self,
        resources: &HashMap<String, ImageResource>,
    ) -> Result<(), RenderError>;

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
