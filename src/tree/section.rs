//! Top-level sections (head/body)

use std::fmt;

use crate::{error::Result, render::Render, tree::Tag};

/// A top-level document section
///
/// Sections are never single and never child-style, and unlike [`Tag`] a
/// section emits its own closing tag when rendered. That asymmetry between
/// the two container kinds is part of the output contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    /// Wrapped child markup, in append order
    children: Vec<String>,
}

impl Section {
    /// Creates an empty section, e.g. `Section::new("head")`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends a tag, serializing its markup into this section
    ///
    /// Same contract as [`Tag::append`]; a section itself is never single,
    /// so any tag is accepted.
    pub fn append(&mut self, child: Tag) -> Result<()> {
        self.children.push(child.into_markup());
        Ok(())
    }
}

impl Render for Section {
    fn render(&self) -> String {
        let mut output = String::new();
        output.push('<');
        output.push_str(&self.name);
        output.push('>');
        for chunk in &self.children {
            output.push('\n');
            output.push_str(chunk);
        }
        output.push_str("\n</");
        output.push_str(&self.name);
        output.push('>');
        output
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
