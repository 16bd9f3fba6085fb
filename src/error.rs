// src/error.rs
use facture_layout::LayoutError;
use facture_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for the entire invoice generation pipeline.
#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("invalid invoice input: {0}")]
    InvalidInput(String),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to store invoice artifact: {0}")]
    Storage(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
