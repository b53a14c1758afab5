//! markgen: a composable HTML markup generator
//!
//! This crate provides functionality to:
//! - Compose nested tag elements into a document tree
//! - Render the tree into deterministic, indented markup
//! - Deliver the result to a file or stdout
//! - Handle errors with detailed context
//!
//! # Examples
//! ```
//! use markgen::{Document, Render, Result, Section, Tag};
//!
//! fn example() -> Result<()> {
//!     let mut body = Section::new("body");
//!     body.append(Tag::new("h1").with_text("Test"))?;
//!     let document = Document::new(Section::new("head"), body);
//!     println!("{}", document.render());
//!     Ok(())
//! }
//! ```

use tracing::{debug, instrument};

pub mod error;
pub mod render;
pub mod sink;
pub mod test_utils;
pub mod tree;
pub mod utils;

// Re-exports
pub use error::{IOError, MarkupError, MarkupErrorKind, Result, StructureError};
pub use render::Render;
pub use sink::{export, OutputConfig};
pub use tree::{Document, Section, Tag};

/// Renders a document and delivers it to the configured destination
#[instrument(skip(document))]
pub fn export_document(document: &Document, config: &OutputConfig) -> Result<()> {
    debug!("Rendering document");
    let markup = document.render();
    debug!(bytes = markup.len(), "Document rendered");
    sink::export(&markup, config)
}
