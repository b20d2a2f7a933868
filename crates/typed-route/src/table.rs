//! Route tables: keyed collections of route descriptors
//!
//! Application code declares its routes once, usually in a `Lazy` static, and looks
//! them up by key for URL creation or scans them to recognize an inbound path.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, RouteError};
use crate::parse::ParsedRoute;
use crate::route::RouteDescriptor;
use crate::values::Values;

/// Route descriptors keyed by name, in declaration order
///
/// # Examples
///
/// ```
/// use typed_route::{param, route, RouteTable, Values};
///
/// let table = RouteTable::builder()
///     .with_route("home", route!("home").unwrap())
///     .with_route("view", route!("view", param("id")).unwrap())
///     .build()
///     .unwrap();
///
/// let url = table.create("view", &Values::new().with_param("id", 7)).unwrap();
/// assert_eq!(url, "/view/7");
///
/// let (key, parsed) = table.recognize("/view/7").unwrap();
/// assert_eq!(key, "view");
/// assert_eq!(parsed.param("id"), Some("7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, RouteDescriptor)>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Builds a table from `(key, descriptor)` pairs
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedSegment`] when a key is declared twice.
    pub fn from_routes<I, K>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, RouteDescriptor)>,
        K: Into<String>,
    {
        let table = routes
            .into_iter()
            .try_fold(RouteTable::default(), |table, (key, descriptor)| {
                table.with_entry(key.into(), descriptor)
            })?;

        debug!(routes = table.len(), "route table built");
        Ok(table)
    }

    fn with_entry(mut self, key: String, descriptor: RouteDescriptor) -> Result<Self> {
        if self.index.contains_key(&key) {
            return Err(RouteError::malformed(format!(
                "route key `{}` declared twice",
                key
            )));
        }
        self.index.insert(key.clone(), self.routes.len());
        self.routes.push((key, descriptor));
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&RouteDescriptor> {
        self.index.get(key).map(|&i| &self.routes[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDescriptor)> {
        self.routes.iter().map(|(key, d)| (key.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Creates a URL for the route registered under `key`
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] for an unregistered key, otherwise whatever
    /// [`RouteDescriptor::create`] returns.
    pub fn create(&self, key: &str, values: &Values) -> Result<String> {
        self.get(key)
            .ok_or_else(|| RouteError::UnknownRoute(key.to_string()))?
            .create(values)
    }

    /// Finds the first route, in declaration order, whose shape matches `path`
    ///
    /// Mismatching candidates are skipped; `None` means no route recognized the path.
    pub fn recognize(&self, path: &str) -> Option<(&str, ParsedRoute)> {
        self.routes.iter().find_map(|(key, descriptor)| {
            descriptor
                .parse(path)
                .ok()
                .map(|parsed| (key.as_str(), parsed))
        })
    }
}

/// Chaining builder for [`RouteTable`]
///
/// Duplicate keys are reported by [`RouteTableBuilder::build`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<(String, RouteDescriptor)>,
}

impl RouteTableBuilder {
    pub fn with_route(mut self, key: impl Into<String>, descriptor: RouteDescriptor) -> Self {
        self.routes.push((key.into(), descriptor));
        self
    }

    pub fn build(self) -> Result<RouteTable> {
        RouteTable::from_routes(self.routes)
    }
}
