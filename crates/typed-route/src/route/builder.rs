//! Route descriptor construction
//!
//! Fold-based assembly of route parts into a [`RouteDescriptor`]. Every check that
//! can reject a route definition lives here, so a descriptor that exists is valid.

use std::collections::HashSet;

use tracing::debug;

use super::{RouteDescriptor, RoutePart};
use crate::error::{Result, RouteError};
use crate::query::QueryDescriptor;
use crate::segment::{check_literal, Segment};

/// Accumulator for the construction fold
///
/// Each builder method consumes and returns the state, enabling `try_fold`.
#[derive(Default)]
struct BuildState {
    segments: Vec<Segment>,
    query: Option<QueryDescriptor>,
    param_names: HashSet<String>,
}

impl BuildState {
    /// Appends a path segment; no segment may follow the query descriptor
    fn with_segment(mut self, segment: Segment) -> Result<Self> {
        if self.query.is_some() {
            return Err(RouteError::malformed(
                "query descriptor must be the last route part",
            ));
        }

        match &segment {
            Segment::Literal(value) => check_literal(value)?,
            Segment::Param(name) => {
                check_param_name(name)?;

                if !self.param_names.insert(name.clone()) {
                    return Err(RouteError::malformed(format!(
                        "duplicate parameter name `{}`",
                        name
                    )));
                }
            }
        }

        self.segments.push(segment);
        Ok(self)
    }

    /// Attaches the query descriptor
    fn with_query(mut self, query: QueryDescriptor) -> Result<Self> {
        if self.query.is_some() {
            return Err(RouteError::malformed(
                "a route accepts at most one query descriptor",
            ));
        }
        self.query = Some(query);
        Ok(self)
    }

    fn finish(self) -> RouteDescriptor {
        RouteDescriptor {
            segments: self.segments,
            query: self.query,
        }
    }
}

/// Parameter names must render as one template segment and be suppliable
/// through the values wire shape, where `query` is the query sub-map
fn check_param_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RouteError::malformed("parameter name must not be empty"));
    }
    if let Some(c) = name.chars().find(|c| matches!(*c, '/' | '?' | '#')) {
        return Err(RouteError::malformed(format!(
            "parameter name `{}` contains `{}`",
            name, c
        )));
    }
    if name == "query" {
        return Err(RouteError::malformed(
            "parameter name `query` is reserved for query values",
        ));
    }
    Ok(())
}

/// Processes a single part and updates the build state
fn process_part(state: BuildState, part: RoutePart) -> Result<BuildState> {
    match part {
        RoutePart::Text(text) => state.with_segment(Segment::Literal(text)),
        RoutePart::Segment(segment) => state.with_segment(segment),
        RoutePart::Query(query) => state.with_query(query),
    }
}

/// Builds a route descriptor from an ordered sequence of parts
///
/// Plain strings become literal segments, [`Segment`]s are taken as-is, and a
/// [`QueryDescriptor`] may appear once, as the final part. The [`route!`](crate::route!)
/// macro is the variadic form of this function.
///
/// # Errors
///
/// [`RouteError::MalformedSegment`] when a literal or parameter name is invalid, a
/// parameter name repeats, or the query descriptor is misplaced or repeated.
///
/// # Examples
///
/// ```
/// use typed_route::{param, query, route, RoutePart};
///
/// let parts: Vec<RoutePart> = vec![
///     "view".into(),
///     param("id").into(),
///     query(["dateCreated", "dateUpdated"]).unwrap().into(),
/// ];
/// let view = route(parts).unwrap();
/// assert_eq!(view.template(), "/view/:id");
///
/// // A query descriptor must come last
/// let parts: Vec<RoutePart> = vec![query(["sp"]).unwrap().into(), "view".into()];
/// assert!(route(parts).is_err());
/// ```
pub fn route<I, P>(parts: I) -> Result<RouteDescriptor>
where
    I: IntoIterator<Item = P>,
    P: Into<RoutePart>,
{
    let descriptor = parts
        .into_iter()
        .map(Into::<RoutePart>::into)
        .try_fold(BuildState::default(), process_part)?
        .finish();

    debug!(
        template = %descriptor.template(),
        query_keys = descriptor.query().map_or(0, QueryDescriptor::len),
        "route descriptor built"
    );

    Ok(descriptor)
}
