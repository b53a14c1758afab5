mod fixtures;
mod helpers;

pub use fixtures::{sample_document, SAMPLE_MARKUP};
pub use helpers::tmp_file_path;

// Re-export common test types/traits
pub use crate::{
    error::{IOError, MarkupError, MarkupErrorKind, Result, StructureError},
    export_document,
    render::{Render, CHILD_INDENT, SINGLE_TAG_SUFFIX, TAG_INDENT},
    sink::{export, OutputConfig},
    tree::{Document, Section, Tag},
    utils::write_file,
};
