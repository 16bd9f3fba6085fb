//! Facture renders storefront orders into paginated PDF invoices.
//!
//! The pipeline is linear: upstream order/customer JSON records are
//! normalized into an [`InvoiceDoc`], the layout engine paginates it into
//! positioned elements, the lopdf backend serializes those into a document,
//! and the storage sink persists it under a collision-free name, returning
//! the public reference.

pub mod assets;
pub mod error;
pub mod model;
pub mod renderer;
pub mod resolve;
pub mod storage;

pub use error::InvoiceError;
pub use model::{Address, Amount, CustomerRecord, LineItem, OrderRecord, ProductRef, Quantity};
pub use renderer::{InvoiceRenderer, RendererConfig};

pub use facture_layout::{InvoiceDoc, InvoiceLayout, LaidOutInvoice};
pub use facture_style::Theme;
pub use facture_types::ImageResource;
