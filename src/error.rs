//! Error handling types for the markup builder
//!
//! This module provides custom error types that distinguish structural
//! misuse of the tag tree from output-side IO failures.

use std::{error::Error, fmt};

/// Main error type for markup operations
#[derive(Debug)]
pub struct MarkupError {
    /// The specific kind of error
    kind: MarkupErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum MarkupErrorKind {
    IO(IOError),
    Structure(StructureError),
}

/// Structural misuse of the tag tree
///
/// These are programming errors: the tree was assembled in a way the
/// builder cannot represent. They are surfaced immediately and are not
/// user-recoverable.
#[derive(Debug, Clone)]
pub enum StructureError {
    /// A child was appended to a single tag
    ChildOfSingleTag {
        /// Tag that rejected the child
        parent: String,
        /// Tag that was being appended
        child: String,
    },
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IOError {
    /// Output path cannot be resolved (missing directory)
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error writing to a file
    WriteError(String),
}

impl MarkupError {
    pub fn new(kind: MarkupErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &MarkupErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            MarkupErrorKind::IO(err) => err.to_string(),
            MarkupErrorKind::Structure(err) => err.to_string(),
        };

        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildOfSingleTag { parent, child } => write!(
                f,
                "Cannot append '{}' to single tag '{}': single tags take no children",
                child, parent
            ),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, MarkupError>;
