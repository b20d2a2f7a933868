//! Template string parsing
//!
//! Pure functional parsing of `/view/:id` style templates back into typed segments.
//! This is the inverse of [`RouteDescriptor::template`](super::RouteDescriptor::template).

use crate::error::{Result, RouteError};
use crate::segment::{literal, param, Segment};

/// Classifies one template segment (pure function)
///
/// # Parsing Rules
///
/// 1. **Parameter**: `:name`
/// 2. **Literal**: any other non-empty text without `/`
///
/// # Examples
///
/// ```
/// use typed_route::route::pattern::classify_segment;
/// use typed_route::Segment;
///
/// assert_eq!(classify_segment("view").unwrap(), Segment::Literal("view".to_string()));
/// assert_eq!(classify_segment(":id").unwrap(), Segment::Param("id".to_string()));
/// assert!(classify_segment(":").is_err());
/// assert!(classify_segment("").is_err());
/// ```
pub fn classify_segment(segment: &str) -> Result<Segment> {
    match segment.strip_prefix(':') {
        Some("") => Err(RouteError::malformed(
            "parameter placeholder `:` has no name",
        )),
        Some(name) => Ok(param(name)),
        None => literal(segment),
    }
}

/// Parses a template into segments
///
/// The leading `/` is optional and `/` alone is the empty route. Empty segments,
/// including one left by a trailing `/`, are rejected.
///
/// # Examples
///
/// ```
/// use typed_route::route::pattern::parse_template;
/// use typed_route::{param, Segment};
///
/// let segments = parse_template("/view/:id").unwrap();
/// assert_eq!(segments, vec![Segment::Literal("view".to_string()), param("id")]);
///
/// assert!(parse_template("/").unwrap().is_empty());
/// assert!(parse_template("/view//:id").is_err());
/// ```
pub fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let trimmed = template.strip_prefix('/').unwrap_or(template);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed.split('/').map(classify_segment).collect()
}
