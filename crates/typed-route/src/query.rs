//! Query descriptors: the query-string keys a route recognizes

use std::collections::HashSet;

use crate::error::{Result, RouteError};

/// Ordered, duplicate-free set of recognized query keys
///
/// Keys keep the order they were declared in. A key that is not declared
/// here is never emitted by `create` and never reported by `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    keys: Vec<String>,
}

impl QueryDescriptor {
    /// Declared keys in declaration order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a descriptor built by [`query`]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Declares the query keys a route recognizes
///
/// At least one key is required, keys must be unique, and a key may not contain
/// `=`, `&` or `#` since it is emitted verbatim into the query string.
///
/// # Examples
///
/// ```
/// use typed_route::query;
///
/// let q = query(["dateCreated", "dateUpdated"]).unwrap();
/// assert_eq!(q.keys(), ["dateCreated", "dateUpdated"]);
///
/// assert!(query(Vec::<String>::new()).is_err());
/// assert!(query(["sp", "sp"]).is_err());
/// ```
pub fn query<I, S>(keys: I) -> Result<QueryDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let keys = keys
        .into_iter()
        .map(|key| {
            let key: String = key.into();
            if key.is_empty() {
                return Err(RouteError::malformed("query key must not be empty"));
            }
            if let Some(c) = key.chars().find(|c| matches!(*c, '=' | '&' | '#')) {
                return Err(RouteError::malformed(format!(
                    "query key `{}` contains `{}`",
                    key, c
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(RouteError::malformed(format!(
                    "duplicate query key `{}`",
                    key
                )));
            }
            Ok(key)
        })
        .collect::<Result<Vec<_>>>()?;

    if keys.is_empty() {
        return Err(RouteError::malformed(
            "query descriptor needs at least one key",
        ));
    }

    Ok(QueryDescriptor { keys })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_preserves_order() {
        let q = query(["sp", "sd"]).unwrap();
        assert_eq!(q.keys(), ["sp", "sd"]);
        assert_eq!(q.len(), 2);
        assert!(q.contains("sd"));
        assert!(!q.contains("page"));
    }

    #[test]
    fn test_query_rejects_duplicates() {
        let err = query(["sp", "sd", "sp"]).unwrap_err();
        assert_eq!(
            err,
            RouteError::MalformedSegment("duplicate query key `sp`".to_string())
        );
    }

    #[test]
    fn test_query_rejects_empty_list() {
        assert!(matches!(
            query(Vec::<&str>::new()),
            Err(RouteError::MalformedSegment(_))
        ));
    }

    #[test]
    fn test_query_rejects_empty_key() {
        assert!(query(["sp", ""]).is_err());
    }

    #[test]
    fn test_query_rejects_pair_separators_in_key() {
        assert_eq!(
            query(["a=b"]).unwrap_err(),
            RouteError::malformed("query key `a=b` contains `=`")
        );
        assert!(query(["sp", "a&b"]).is_err());
    }
}
