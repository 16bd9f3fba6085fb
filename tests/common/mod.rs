pub mod fixtures;
pub mod pdf_assertions;

use facture::{CustomerRecord, InvoiceRenderer, OrderRecord};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render an invoice through the pure CPU path (no sink, no asset I/O).
pub fn generate_invoice_pdf(
    order: &OrderRecord,
    customer: &CustomerRecord,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    order.validate()?;
    let renderer = InvoiceRenderer::with_defaults()?;
    let doc = facture::model::to_invoice_doc(order, customer);
    let bytes = renderer.render_document(&doc, None)?;
    GeneratedPdf::from_bytes(bytes)
}
