//! A `lopdf`-backed implementation of the `DocumentRenderer` capability.
//!
//! Builds the document object graph in memory: catalog, pages tree, one
//! content stream per page, a shared resources dictionary carrying the
//! builtin font set, image XObjects, and transparency graphics states.

mod renderer;

pub use renderer::LopdfDocumentRenderer;
