//! The invoice rendering service.

use crate::assets;
use crate::error::InvoiceError;
use crate::model::{self, CustomerRecord, OrderRecord};
use crate::storage;
use facture_layout::{InvoiceDoc, InvoiceLayout};
use facture_render_core::DocumentRenderer;
use facture_render_lopdf::LopdfDocumentRenderer;
use facture_style::Theme;
use facture_types::ImageResource;
use std::path::PathBuf;

/// Where artifacts land and how they are referenced back to callers.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub output_dir: PathBuf,
    pub public_prefix: String,
    pub brand_asset_paths: Vec<PathBuf>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("invoices"),
            public_prefix: "/invoices".to_string(),
            brand_asset_paths: assets::default_candidate_paths(),
        }
    }
}

/// Renders one invoice per call. Holds no per-call state: concurrent
/// renders share the validated layout and nothing else.
pub struct InvoiceRenderer {
    layout: InvoiceLayout,
    config: RendererConfig,
}

impl InvoiceRenderer {
    /// Validates the theme once, up front; render calls never re-check the
    /// column geometry.
    pub fn new(theme: Theme, config: RendererConfig) -> Result<Self, InvoiceError> {
        Ok(Self { layout: InvoiceLayout::new(theme)?, config })
    }

    pub fn with_defaults() -> Result<Self, InvoiceError> {
        Self::new(Theme::default(), RendererConfig::default())
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders one invoice and returns the public artifact reference.
    ///
    /// Input is validated before any drawing or I/O. The brand asset is
    /// best-effort. On success exactly one artifact exists; on failure,
    /// none is referenced.
    pub async fn render(
        &self,
        order: &OrderRecord,
        customer: &CustomerRecord,
    ) -> Result<String, InvoiceError> {
        order.validate()?;
        let doc = model::to_invoice_doc(order, customer);
        let logo = assets::load_brand_image(&self.config.brand_asset_paths).await;
        let pdf = self.render_document(&doc, logo.as_ref())?;
        storage::store(&self.config.output_dir, &self.config.public_prefix, &order.id, &pdf)
            .await
            .map_err(InvoiceError::Storage)
    }

    /// The pure CPU path: layout plus PDF serialization, no I/O. Exposed
    /// separately so tests and callers with their own sinks can use it.
    pub fn render_document(
        &self,
        doc: &InvoiceDoc,
        logo: Option<&ImageResource>,
    ) -> Result<Vec<u8>, InvoiceError> {
        let laid_out = self.layout.paginate(doc, logo);
        let title = format!("Invoice {}", doc.number);
        let mut renderer: Box<dyn DocumentRenderer> =
            Box::new(LopdfDocumentRenderer::new(self.layout.theme().page, &title));
        renderer.begin_document()?;
        renderer.add_resources(&laid_out.resources)?;
        for page in &laid_out.pages {
            renderer.render_page(page)?;
        }
        Ok(renderer.finish()?)
    }
}
