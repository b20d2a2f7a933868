//! Path parsing: matching an inbound URL against a route descriptor
//!
//! Matching is strictly positional and strictly by count:
//!
//! - the path (everything before the first `?`) is split into raw segments, ignoring
//!   one leading and one trailing `/`
//! - the number of raw segments must equal the number of route segments
//! - a literal must equal its raw segment exactly; a parameter takes any non-empty value
//! - when the route declares query keys, recognized `key=value` pairs are collected and
//!   unknown keys are ignored, so new query parameters never break matching
//!
//! Nothing is decoded: values come back exactly as they appear in the path.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Result, RouteError};
use crate::path::{query_pairs, split_query, split_segments};
use crate::query::QueryDescriptor;
use crate::route::RouteDescriptor;
use crate::segment::Segment;
use crate::values::{upsert, Values};

/// Values recovered from an inbound path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoute {
    params: HashMap<String, String>,
    query: Vec<(String, String)>,
}

impl ParsedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Recognized query pairs in the order they appeared in the path
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the result into [`Values`] suitable for `create`
    ///
    /// Feeding the values back through the same route reproduces the path.
    pub fn into_values(self) -> Values {
        let query = if self.query.is_empty() {
            None
        } else {
            Some(self.query)
        };
        Values::from_parts(self.params, query)
    }
}

/// Matches `url` against `route`, extracting parameters and recognized query pairs
///
/// # Errors
///
/// [`RouteError::RouteMismatch`] when the segment count differs, a literal differs,
/// or a parameter segment is empty.
pub(crate) fn match_path(route: &RouteDescriptor, url: &str) -> Result<ParsedRoute> {
    let (path, raw_query) = split_query(url);
    let raw_segments = split_segments(path);

    let mismatch = |reason: String| {
        trace!(path = %url, template = %route.template(), %reason, "route mismatch");
        RouteError::RouteMismatch {
            path: url.to_string(),
            template: route.template(),
            reason,
        }
    };

    if raw_segments.len() != route.segments().len() {
        return Err(mismatch(format!(
            "expected {} segments, found {}",
            route.segments().len(),
            raw_segments.len()
        )));
    }

    let params = route
        .segments()
        .iter()
        .zip(raw_segments.iter().copied())
        .try_fold(HashMap::new(), |mut params, (segment, raw)| match segment {
            Segment::Literal(expected) if expected == raw => Ok(params),
            Segment::Literal(expected) => Err(mismatch(format!(
                "expected `{}`, found `{}`",
                expected, raw
            ))),
            Segment::Param(name) if raw.is_empty() => Err(mismatch(format!(
                "empty value for parameter `{}`",
                name
            ))),
            Segment::Param(name) => {
                params.insert(name.clone(), raw.to_string());
                Ok(params)
            }
        })?;

    let query = match (route.query(), raw_query) {
        (Some(declared), Some(raw)) => recognized_pairs(declared, raw),
        _ => Vec::new(),
    };

    Ok(ParsedRoute { params, query })
}

/// Keeps declared keys; a repeated key keeps its first position and last value
fn recognized_pairs(declared: &QueryDescriptor, raw: &str) -> Vec<(String, String)> {
    query_pairs(raw)
        .filter(|(key, _)| declared.contains(key))
        .fold(Vec::new(), |mut pairs, (key, value)| {
            upsert(&mut pairs, key.to_string(), value.to_string());
            pairs
        })
}
