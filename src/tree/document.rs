//! The document root

use std::fmt;

use crate::{render::Render, tree::Section};

/// Root tag of every document
const ROOT_TAG: &str = "html";

/// A complete document: an `html` root wrapping a head and a body
///
/// The constructor takes both sections, so a document always holds exactly
/// two and renders them in head-then-body order. Like [`Section`], the
/// document closes itself when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    head: Section,
    body: Section,
}

impl Document {
    pub fn new(head: Section, body: Section) -> Self {
        Self { head, body }
    }

    pub fn head(&self) -> &Section {
        &self.head
    }

    pub fn body(&self) -> &Section {
        &self.body
    }
}

impl Render for Document {
    fn render(&self) -> String {
        format!(
            "<{root}>\n{head}\n{body}\n</{root}>",
            root = ROOT_TAG,
            head = self.head.render(),
            body = self.body.render(),
        )
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
