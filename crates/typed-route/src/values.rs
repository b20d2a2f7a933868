//! The values object handed to `RouteDescriptor::create`
//!
//! Parameters are a flat name → value mapping. Query values live in a separate,
//! ordered list so the emitted query string follows the order the caller supplied.
//!
//! The serde shape matches the JSON form route tables are usually fed with:
//!
//! ```json
//! { "id": "3", "query": { "dateCreated": "1/1/2018" } }
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

/// Parameter and query values used to build a concrete URL
///
/// # Examples
///
/// ```
/// use typed_route::Values;
///
/// let values = Values::new()
///     .with_param("id", 3)
///     .with_query("dateCreated", "1/1/2018");
///
/// assert_eq!(values.param("id"), Some("3"));
/// assert_eq!(values.query_value("dateCreated"), Some("1/1/2018"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    params: HashMap<String, String>,
    query: Option<Vec<(String, String)>>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter value, formatted with `Display`
    pub fn with_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert_param(name, value);
        self
    }

    /// Adds a query value, formatted with `Display`
    ///
    /// Setting a key twice keeps its original position and replaces the value.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert_query(key, value);
        self
    }

    pub fn insert_param(&mut self, name: impl Into<String>, value: impl Display) {
        self.params.insert(name.into(), value.to_string());
    }

    pub fn insert_query(&mut self, key: impl Into<String>, value: impl Display) {
        upsert(
            self.query.get_or_insert_with(Vec::new),
            key.into(),
            value.to_string(),
        );
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query_pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Query pairs in the order they were supplied; empty when no query was given
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether a `query` sub-mapping was supplied at all
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    pub(crate) fn from_parts(
        params: HashMap<String, String>,
        query: Option<Vec<(String, String)>>,
    ) -> Self {
        Self { params, query }
    }
}

/// Collects `(name, value)` pairs as parameters
impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Values::new(), |values, (k, v)| values.with_param(k, v))
    }
}

pub(crate) fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(existing) => existing.1 = value,
        None => pairs.push((key, value)),
    }
}

impl<'de> Deserialize<'de> for Values {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ValuesVisitor)
    }
}

struct ValuesVisitor;

impl<'de> Visitor<'de> for ValuesVisitor {
    type Value = Values;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of parameter values with an optional `query` map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Values, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut params = HashMap::new();
        let mut query: Option<Option<OrderedPairs>> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "query" {
                if query.is_some() {
                    return Err(de::Error::duplicate_field("query"));
                }
                query = Some(map.next_value()?);
            } else {
                let value: String = map.next_value()?;
                params.insert(key, value);
            }
        }

        Ok(Values::from_parts(
            params,
            query.flatten().map(|pairs| pairs.0),
        ))
    }
}

/// A string → string map that remembers document order
struct OrderedPairs(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of query keys to string values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<OrderedPairs, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    upsert(&mut pairs, key, value);
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
