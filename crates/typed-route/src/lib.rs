//! # typed-route
//!
//! Declarative route templates built from literal segments, named parameters and
//! recognized query keys. A route descriptor is built once and then:
//!
//! - renders its template (`/view/:id`)
//! - creates concrete URLs from typed [`Values`] (`/view/3?dateCreated=1/1/2018`)
//! - parses inbound paths back into parameter and query values
//!
//! ## Functional Programming Approach
//!
//! - **Immutable descriptors**: construction validates everything, afterwards nothing mutates
//! - **Tagged segments** with exhaustive matching in every algorithm
//! - **Fold-based construction** (`try_fold` over route parts)
//! - **Positional matching**: no backtracking, no search, O(segments)
//!
//! ## Example
//!
//! ```
//! use typed_route::{param, query, route, Values};
//!
//! let details = route!("view", param("id"), query(["dateCreated", "dateUpdated"]).unwrap()).unwrap();
//!
//! assert_eq!(details.template(), "/view/:id");
//!
//! let url = details
//!     .create(&Values::new().with_param("id", 3).with_query("dateCreated", "1/1/2018"))
//!     .unwrap();
//! assert_eq!(url, "/view/3?dateCreated=1/1/2018");
//!
//! let parsed = details.parse("/view/3").unwrap();
//! assert_eq!(parsed.param("id"), Some("3"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod parse;
pub mod path;
mod query;
pub mod route;
mod segment;
pub mod table;
mod values;

// Re-export public types
pub use config::{RouteEntry, RoutesConfig};
pub use error::{Result, RouteError};
pub use parse::ParsedRoute;
pub use query::{query, QueryDescriptor};
pub use route::{route, RouteDescriptor, RoutePart};
pub use segment::{literal, param, Segment};
pub use table::{RouteTable, RouteTableBuilder};
pub use values::Values;

/// Builds a [`RouteDescriptor`] from a variadic list of parts
///
/// Each argument is a plain string, a [`Segment`] or a [`QueryDescriptor`] (last only).
/// Expands to a call to [`route()`](fn@crate::route), so it returns [`Result`].
///
/// # Examples
///
/// ```
/// use typed_route::{param, query, route};
///
/// let home = route!("home").unwrap();
/// assert_eq!(home.template(), "/home");
///
/// let only_param = route!(param("param")).unwrap();
/// assert_eq!(only_param.template(), "/:param");
///
/// let counts = route!(
///     "fcm", "inventory", "counts", "kitchen", param("kitchenId"),
///     "count", param("countId"), query(["sp", "sd"]).unwrap()
/// )
/// .unwrap();
/// assert_eq!(counts.template(), "/fcm/inventory/counts/kitchen/:kitchenId/count/:countId");
/// ```
#[macro_export]
macro_rules! route {
    () => {
        $crate::route(::std::vec::Vec::<$crate::RoutePart>::new())
    };
    ($($part:expr),+ $(,)?) => {
        $crate::route([$($crate::RoutePart::from($part)),+])
    };
}
