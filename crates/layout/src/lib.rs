use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid theme: {0}")]
    Theme(#[from] facture_style::ThemeError),
}

pub mod document;
pub mod elements;
pub mod engine;
pub mod output;
pub mod text;

pub use self::document::{BillTo, InvoiceDoc, LineRow, Totals};
pub use self::elements::{
    ImageElement, LayoutElement, PositionedElement, RectElement, Stroke, TextElement,
};
pub use self::engine::{InvoiceLayout, LOGO_RESOURCE};
pub use self::output::LaidOutInvoice;
