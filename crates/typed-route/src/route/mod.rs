//! Route module: the immutable route descriptor and its operations
//!
//! Contains pure functional components for route construction, rendering and URL creation:
//! - Pure functions (same input → same output)
//! - Immutable data structures (a descriptor never changes after construction)
//! - Pattern matching over tagged segments for control flow

pub mod builder;
pub mod pattern;

use std::iter;

use tracing::trace;

use crate::error::{Result, RouteError};
use crate::parse::{match_path, ParsedRoute};
use crate::query::{query, QueryDescriptor};
use crate::segment::Segment;
use crate::values::Values;

// Re-export commonly used items
pub use builder::route;
pub use pattern::{classify_segment, parse_template};

/// One element of the builder input
///
/// Plain strings normalize to literal segments. Usually produced through `From`
/// conversions by [`route!`](crate::route!) rather than written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePart {
    /// Plain string, becomes [`Segment::Literal`]
    Text(String),
    /// Already-built segment token
    Segment(Segment),
    /// Query descriptor, only valid as the final part
    Query(QueryDescriptor),
}

impl From<&str> for RoutePart {
    fn from(text: &str) -> Self {
        RoutePart::Text(text.to_string())
    }
}

impl From<String> for RoutePart {
    fn from(text: String) -> Self {
        RoutePart::Text(text)
    }
}

impl From<Segment> for RoutePart {
    fn from(segment: Segment) -> Self {
        RoutePart::Segment(segment)
    }
}

impl From<QueryDescriptor> for RoutePart {
    fn from(query: QueryDescriptor) -> Self {
        RoutePart::Query(query)
    }
}

/// Complete, immutable definition of one route
///
/// Built once (typically when a route table is declared) and shared read-only
/// afterwards; every operation takes `&self`.
///
/// # Examples
///
/// ```
/// use typed_route::{param, query, route, Values};
///
/// let details = route!("view", param("id"), query(["dateCreated", "dateUpdated"]).unwrap()).unwrap();
/// assert_eq!(details.template(), "/view/:id");
///
/// let url = details
///     .create(&Values::new().with_param("id", 3).with_query("dateCreated", "1/1/2018"))
///     .unwrap();
/// assert_eq!(url, "/view/3?dateCreated=1/1/2018");
///
/// let parsed = details.parse("/view/3?dateCreated=1/1/2018&page=2").unwrap();
/// assert_eq!(parsed.param("id"), Some("3"));
/// assert_eq!(parsed.query_value("dateCreated"), Some("1/1/2018"));
/// assert_eq!(parsed.query_value("page"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub(crate) segments: Vec<Segment>,
    pub(crate) query: Option<QueryDescriptor>,
}

impl RouteDescriptor {
    /// Parses a `template()`-style string such as `/view/:id`
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::{param, route, RouteDescriptor};
    ///
    /// let parsed = RouteDescriptor::from_template("/view/:id/more/:otherId").unwrap();
    /// let built = route!("view", param("id"), "more", param("otherId")).unwrap();
    /// assert_eq!(parsed, built);
    /// ```
    pub fn from_template(template: &str) -> Result<Self> {
        route(parse_template(template)?)
    }

    /// Parses a template and attaches the given query keys
    pub fn from_template_with_query<I, S>(template: &str, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = parse_template(template)?.into_iter().map(RoutePart::from);
        route(segments.chain(iter::once(RoutePart::from(query(keys)?))))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn query(&self) -> Option<&QueryDescriptor> {
        self.query.as_ref()
    }

    /// Parameter names in path order
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the route shape: literals as-is, parameters as `:name`
    ///
    /// Query keys are not part of the template. A route without segments renders `/`.
    pub fn template(&self) -> String {
        let rendered: Vec<String> = self.segments.iter().map(Segment::to_string).collect();
        format!("/{}", rendered.join("/"))
    }

    /// Builds a concrete URL from parameter and query values
    ///
    /// Every parameter must have a value. Query pairs are emitted only for keys the
    /// route declares, in the order the caller supplied them; undeclared keys are
    /// dropped and no `?` is written when nothing remains. Values are inserted
    /// verbatim, so callers pre-encode anything that needs it.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParameter`] for the first parameter without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::{param, route, RouteError, Values};
    ///
    /// let more = route!("view", param("id"), "more", param("otherId")).unwrap();
    /// let url = more.create(&Values::new().with_param("id", 3).with_param("otherId", 4)).unwrap();
    /// assert_eq!(url, "/view/3/more/4");
    ///
    /// let err = more.create(&Values::new().with_param("id", 3)).unwrap_err();
    /// assert!(matches!(err, RouteError::MissingParameter { .. }));
    /// ```
    pub fn create(&self, values: &Values) -> Result<String> {
        let path_segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(value) => Ok(value.as_str()),
                Segment::Param(name) => {
                    values
                        .param(name)
                        .ok_or_else(|| RouteError::MissingParameter {
                            name: name.clone(),
                            template: self.template(),
                        })
                }
            })
            .collect::<Result<Vec<&str>>>()?;

        let mut url = format!("/{}", path_segments.join("/"));

        if let Some(declared) = &self.query {
            let pairs: Vec<String> = values
                .query_pairs()
                .filter(|(key, _)| {
                    let known = declared.contains(key);
                    if !known {
                        trace!(key = %key, template = %self.template(), "dropping undeclared query key");
                    }
                    known
                })
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();

            if !pairs.is_empty() {
                url.push('?');
                url.push_str(&pairs.join("&"));
            }
        }

        Ok(url)
    }

    /// Matches an inbound path against this route
    ///
    /// See [`crate::parse`] for the matching rules.
    pub fn parse(&self, path: &str) -> Result<ParsedRoute> {
        match_path(self, path)
    }

    /// Returns true when `path` has this route's shape
    pub fn matches(&self, path: &str) -> bool {
        self.parse(path).is_ok()
    }
}
