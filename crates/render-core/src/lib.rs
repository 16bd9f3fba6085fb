//! Rendering abstractions: the document-drawing capability the layout
//! engine's output is handed to, independent of any PDF library.

mod error;
mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
