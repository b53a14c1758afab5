//! Tag elements
//!
//! A [`Tag`] accumulates the markup of appended children in call order.
//! Appending is append-only: a child is serialized once, when it is
//! attached, and cannot be removed or reordered afterwards.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    error::{MarkupError, MarkupErrorKind, Result, StructureError},
    render::{self, Render, CHILD_INDENT, SINGLE_TAG_SUFFIX, TAG_INDENT},
};

/// A composable markup element
///
/// The rendered output of a tag never includes its own closing tag; the
/// parent emits it as part of [`Tag::append`]. Text content is emitted
/// literally, with no escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: String,
    is_single: bool,
    child_style: bool,
    text: String,
    classes: Vec<String>,
    attributes: IndexMap<String, String>,
    /// Wrapped child markup, in append order
    children: Vec<String>,
}

impl Tag {
    /// Creates an ordinary tag with no text, classes, attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_single: false,
            child_style: false,
            text: String::new(),
            classes: Vec::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates a single tag: no closing tag and no children (`img`, `br`)
    pub fn single(name: impl Into<String>) -> Self {
        let mut tag = Self::new(name);
        tag.is_single = true;
        tag
    }

    /// Marks this tag as child-style
    ///
    /// Child-style affects only whitespace: the tag renders at the nested
    /// indentation tier.
    #[must_use]
    pub fn child_style(mut self) -> Self {
        self.child_style = true;
        self
    }

    /// Adds a CSS class; classes render in the order they were added
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds several CSS classes, preserving iteration order
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Adds an attribute; attributes render in insertion order
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the literal inner text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the literal inner text; no escaping is performed
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_single(&self) -> bool {
        self.is_single
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends a child, serializing its markup into this tag
    ///
    /// The child is rendered, given its closing tag where one is due, and
    /// concatenated after any previously appended children. Fails with a
    /// structure error when `self` is a single tag.
    pub fn append(&mut self, child: Tag) -> Result<()> {
        if self.is_single {
            return Err(MarkupError::new(MarkupErrorKind::Structure(
                StructureError::ChildOfSingleTag {
                    parent: self.name.clone(),
                    child: child.name,
                },
            )));
        }
        self.children.push(child.into_markup());
        Ok(())
    }

    fn indent(&self) -> &'static str {
        if self.child_style {
            CHILD_INDENT
        } else {
            TAG_INDENT
        }
    }

    /// Complete markup for this tag as a child: the rendered content plus
    /// the closing tag the parent owes it
    ///
    /// Single tags get no closing tag. A tag without children of its own is
    /// closed on the same line; one with children gets the closing tag on a
    /// fresh line at the tag's indentation tier.
    pub(crate) fn into_markup(self) -> String {
        let mut markup = self.render();
        if self.is_single {
            return markup;
        }
        if !self.children.is_empty() {
            markup.push('\n');
            markup.push_str(self.indent());
        }
        markup.push_str("</");
        markup.push_str(&self.name);
        markup.push('>');
        markup
    }
}

impl Render for Tag {
    fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(self.indent());
        output.push('<');
        output.push_str(&self.name);

        if self.is_single {
            // Single tags render attributes only; classes are not emitted.
            for (key, value) in &self.attributes {
                render::push_attribute(&mut output, key, value);
            }
            output.push_str(SINGLE_TAG_SUFFIX);
            output.push_str("/>");
            return output;
        }

        render::push_classes(&mut output, &self.classes);
        for (key, value) in &self.attributes {
            render::push_attribute(&mut output, key, value);
        }
        output.push('>');
        output.push_str(&self.text);

        for chunk in &self.children {
            output.push('\n');
            output.push_str(chunk);
        }
        output
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
