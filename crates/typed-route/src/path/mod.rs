//! Path utilities for splitting inbound URLs
//!
//! All functions are **pure** and borrow from their input: no allocation beyond
//! the returned `Vec` of segment slices.

/// Splits a URL into its path and the raw query string after the first `?`
///
/// # Examples
///
/// ```
/// use typed_route::path::split_query;
///
/// assert_eq!(split_query("/view/3?sp=1"), ("/view/3", Some("sp=1")));
/// assert_eq!(split_query("/view/3"), ("/view/3", None));
/// assert_eq!(split_query("/view/3?"), ("/view/3", Some("")));
/// ```
pub fn split_query(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

/// Splits a path into raw segments
///
/// One leading and one trailing `/` are discarded; every other `/` separates
/// segments, so interior empty segments (`/a//b`) are kept and will fail to match.
///
/// # Examples
///
/// ```
/// use typed_route::path::split_segments;
///
/// assert_eq!(split_segments("/view/3"), vec!["view", "3"]);
/// assert_eq!(split_segments("/view/3/"), vec!["view", "3"]);
/// assert_eq!(split_segments("view"), vec!["view"]);
/// assert!(split_segments("/").is_empty());
/// assert_eq!(split_segments("/a//b"), vec!["a", "", "b"]);
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Iterates `key=value` pairs of a raw query string
///
/// Pairs are separated by `&` and split on the first `=`; a bare key yields an
/// empty value. Empty pairs (`a=1&&b=2`) are skipped. Nothing is decoded.
///
/// # Examples
///
/// ```
/// use typed_route::path::query_pairs;
///
/// let pairs: Vec<_> = query_pairs("sp=1&flag&sd=a=b").collect();
/// assert_eq!(pairs, vec![("sp", "1"), ("flag", ""), ("sd", "a=b")]);
/// ```
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}
