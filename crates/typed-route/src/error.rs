//! Error types for route construction, URL creation and path parsing

use thiserror::Error;

/// Everything that can go wrong while declaring or using a route
///
/// The variants fall into three groups:
///
/// - [`RouteError::MalformedSegment`] is a programmer error in a static route table.
///   It surfaces at construction time and should fail startup loudly.
/// - [`RouteError::MissingParameter`] is returned by `create` when the caller did not
///   supply a value for one of the route's parameters.
/// - [`RouteError::RouteMismatch`] means "this path does not belong to this route".
///   Callers scanning a table of routes move on to the next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Invalid route definition (bad literal, bad query keys, misplaced query, duplicate params)
    #[error("malformed route definition: {0}")]
    MalformedSegment(String),

    /// `create` was called without a value for a declared parameter
    #[error("missing value for parameter `{name}` of route {template}")]
    MissingParameter { name: String, template: String },

    /// The inbound path does not have this route's shape
    #[error("path `{path}` does not match route {template}: {reason}")]
    RouteMismatch {
        path: String,
        template: String,
        reason: String,
    },

    /// A route table was asked for a key it does not contain
    #[error("no route registered under `{0}`")]
    UnknownRoute(String),
}

impl RouteError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RouteError::MalformedSegment(reason.into())
    }

    /// True when the error only says "not this route"
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::{route, param};
    ///
    /// let view = route!("view", param("id")).unwrap();
    /// let err = view.parse("/view/3/extra").unwrap_err();
    /// assert!(err.is_mismatch());
    /// ```
    pub fn is_mismatch(&self) -> bool {
        matches!(self, RouteError::RouteMismatch { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RouteError>;
