//! Segment tokens: the atomic pieces of a route's path
//!
//! A route path is a sequence of [`Segment`]s, each either a fixed literal
//! or a named parameter placeholder.

use std::fmt;

use crate::error::{Result, RouteError};

/// A single path component of a route
///
/// # Examples
///
/// ```
/// use typed_route::{literal, param, Segment};
///
/// let seg = literal("view").unwrap();
/// assert_eq!(seg, Segment::Literal("view".to_string()));
/// assert_eq!(seg.to_string(), "view");
///
/// let seg = param("id");
/// assert!(seg.is_param());
/// assert_eq!(seg.to_string(), ":id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed text: non-empty, free of `/`, `?` and `#`, not starting with `:`
    Literal(String),
    /// Named placeholder whose value varies per call
    Param(String),
}

impl Segment {
    /// The literal text or the parameter name
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Literal(value) => value,
            Segment::Param(name) => name,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// Renders the segment the way it appears in a template (`view` or `:id`)
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(value) => f.write_str(value),
            Segment::Param(name) => write!(f, ":{}", name),
        }
    }
}

/// Creates a literal segment
///
/// Rejects empty strings, strings containing `/`, `?` or `#`, and strings starting
/// with `:`.
///
/// # Examples
///
/// ```
/// use typed_route::literal;
///
/// assert!(literal("inventory").is_ok());
/// assert!(literal("a/b").is_err());
/// assert!(literal("").is_err());
/// assert!(literal(":id").is_err());
/// ```
pub fn literal(value: impl Into<String>) -> Result<Segment> {
    let value = value.into();
    check_literal(&value)?;
    Ok(Segment::Literal(value))
}

/// Creates a parameter placeholder
///
/// Name uniqueness is checked when the segment is assembled into a route.
pub fn param(name: impl Into<String>) -> Segment {
    Segment::Param(name.into())
}

pub(crate) fn check_literal(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RouteError::malformed("literal segment must not be empty"));
    }
    if let Some(c) = value.chars().find(|c| matches!(*c, '/' | '?' | '#')) {
        return Err(RouteError::malformed(format!(
            "literal segment `{}` contains `{}`",
            value, c
        )));
    }
    // `:name` is how a parameter renders in a template
    if value.starts_with(':') {
        return Err(RouteError::malformed(format!(
            "literal segment `{}` starts with `:`",
            value
        )));
    }
    Ok(())
}
