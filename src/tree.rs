//! The markup tree model
//!
//! Three node kinds make up a document: [`Tag`] elements that are closed by
//! their parent, [`Section`] containers (head/body) that close themselves,
//! and the [`Document`] root that wraps exactly two sections.

pub mod document;
pub mod section;
pub mod tag;

pub use self::{document::Document, section::Section, tag::Tag};
