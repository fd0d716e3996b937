//! Error types with rich diagnostics using miette
//!
//! The evaluator itself never fails. These errors come from the input
//! layers: request parsing (with source spans), form editing, and strict
//! tag parsing.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::kind::{Field, ShapeKind};

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<request>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Request Errors
// ============================================================================

/// Errors from parsing a textual area request
#[derive(Error, Diagnostic, Debug)]
pub enum RequestError {
    #[error("syntax error: {message}")]
    #[diagnostic(
        code(areacalc::request::syntax),
        help("a request looks like `rectangle length=2m width=3 ft`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown shape: {name}")]
    #[diagnostic(
        code(areacalc::request::unknown_shape),
        help("expected one of rectangle, circle, triangle, trapezoid, ellipse, sector")
    )]
    UnknownShape {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a shape")]
        span: SourceSpan,
    },

    #[error("{shape} has no dimension `{name}`")]
    #[diagnostic(code(areacalc::request::unknown_dimension))]
    UnknownDimension {
        name: String,
        shape: ShapeKind,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a {shape} dimension")]
        span: SourceSpan,
        #[help]
        expected: Option<String>,
    },

    #[error("dimension `{field}` given twice")]
    #[diagnostic(code(areacalc::request::duplicate_dimension))]
    DuplicateDimension {
        field: Field,
        #[source_code]
        src: NamedSource<String>,
        #[label("first given here")]
        first: SourceSpan,
        #[label("given again here")]
        second: SourceSpan,
    },
}

// ============================================================================
// Form Errors
// ============================================================================

/// Errors from editing a [`CalculatorForm`](crate::form::CalculatorForm)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("the {shape} form has no {} input", .field.label())]
    #[diagnostic(
        code(areacalc::form::field_not_on_shape),
        help("select the shape that owns this field first")
    )]
    FieldNotOnShape { field: Field, shape: ShapeKind },
}

// ============================================================================
// Tag Errors
// ============================================================================

/// A unit tag that strict parsing does not recognize
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown {expected} unit: {tag:?}")]
#[diagnostic(code(areacalc::unknown_unit))]
pub struct UnknownUnit {
    pub tag: String,
    pub expected: &'static str,
}

/// A shape name that is not one of the supported kinds
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape: {name:?}")]
#[diagnostic(code(areacalc::unknown_shape))]
pub struct UnknownShape {
    pub name: String,
}
