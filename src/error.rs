//! Error types for parsing and rendering.
//!
//! Every failure is terminal for the call that produced it: the parser never
//! returns a partially built diff and the renderer never returns a document
//! that skipped a stage.

use thiserror::Error;

/// Input that is not a unified diff this crate can read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid diff format: not enough lines")]
    NotEnoughLines,

    #[error("invalid diff format: missing file headers")]
    MissingFileHeaders,

    #[error("invalid hunk header on line {line}: {header:?}")]
    InvalidHunkHeader { line: usize, header: String },

    #[error("invalid number {value:?} in hunk header on line {line}")]
    InvalidNumber { line: usize, value: String },
}

/// Failure of the markup compaction collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MinifyError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("minified output is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to execute template: {0}")]
    Assemble(#[from] handlebars::RenderError),

    #[error("failed to minify HTML: {0}")]
    Minify(#[from] MinifyError),
}
