//! Integration tests for typed-route
//!
//! Tests are organized by feature area and cover:
//! - Template rendering
//! - URL creation (params, query ordering, missing params)
//! - Path parsing (count/literal mismatches, unknown query keys)
//! - Parse/create round trips
//! - Route tables, route files and the serde values shape

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use rstest::rstest;
use typed_route::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RouteName {
    Home,
    View,
    ViewDetails,
    ViewMoreDetails,
    OnlyParam,
    Counts,
}

fn build_routes() -> Result<HashMap<RouteName, RouteDescriptor>> {
    Ok(HashMap::from([
        (RouteName::Home, route!("home")?),
        (RouteName::View, route!("view")?),
        (
            RouteName::ViewDetails,
            route!("view", param("id"), query(["dateCreated", "dateUpdated"])?)?,
        ),
        (
            RouteName::ViewMoreDetails,
            route!("view", param("id"), "more", param("otherId"))?,
        ),
        (RouteName::OnlyParam, route!(param("param"))?),
        (
            RouteName::Counts,
            route!(
                "fcm",
                "inventory",
                "counts",
                "kitchen",
                param("kitchenId"),
                "count",
                param("countId"),
                query(["sp", "sd"])?
            )?,
        ),
    ]))
}

static ROUTES: Lazy<HashMap<RouteName, RouteDescriptor>> =
    Lazy::new(|| build_routes().expect("static route table is valid"));

fn routes(name: RouteName) -> &'static RouteDescriptor {
    &ROUTES[&name]
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Template
// ============================================================================

#[rstest]
#[case(RouteName::Home, "/home")]
#[case(RouteName::View, "/view")]
#[case(RouteName::ViewDetails, "/view/:id")]
#[case(RouteName::ViewMoreDetails, "/view/:id/more/:otherId")]
#[case(RouteName::OnlyParam, "/:param")]
#[case(RouteName::Counts, "/fcm/inventory/counts/kitchen/:kitchenId/count/:countId")]
fn test_template_table(#[case] name: RouteName, #[case] expected: &str) {
    assert_eq!(routes(name).template(), expected);
}

#[test]
fn test_template_is_deterministic() {
    for descriptor in ROUTES.values() {
        assert_eq!(descriptor.template(), descriptor.template());
    }
}

#[test]
fn test_template_parses_back() {
    for descriptor in ROUTES.values() {
        let reparsed = RouteDescriptor::from_template(&descriptor.template()).unwrap();
        assert_eq!(reparsed.segments(), descriptor.segments());
    }
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn test_basic_empty_routes() {
    assert_eq!(routes(RouteName::Home).create(&Values::new()).unwrap(), "/home");
    assert_eq!(routes(RouteName::View).create(&Values::new()).unwrap(), "/view");
}

#[test]
fn test_pure_literal_create_equals_template() {
    for name in [RouteName::Home, RouteName::View] {
        let descriptor = routes(name);
        assert_eq!(descriptor.create(&Values::new()).unwrap(), descriptor.template());
    }
}

#[test]
fn test_routes_with_params() {
    let url = routes(RouteName::ViewMoreDetails)
        .create(&Values::new().with_param("id", "3").with_param("otherId", "4"))
        .unwrap();
    assert_eq!(url, "/view/3/more/4");

    let url = routes(RouteName::OnlyParam)
        .create(&Values::new().with_param("param", "1"))
        .unwrap();
    assert_eq!(url, "/1");
}

#[test]
fn test_single_query_value() {
    let url = routes(RouteName::ViewDetails)
        .create(
            &Values::new()
                .with_param("id", "3")
                .with_query("dateCreated", "1/1/2018"),
        )
        .unwrap();
    assert_eq!(url, "/view/3?dateCreated=1/1/2018");
}

#[test]
fn test_query_values_keep_supplied_order() {
    let url = routes(RouteName::ViewDetails)
        .create(
            &Values::new()
                .with_param("id", "3")
                .with_query("dateUpdated", "2/1/2018")
                .with_query("dateCreated", "1/1/2018"),
        )
        .unwrap();
    assert_eq!(url, "/view/3?dateUpdated=2/1/2018&dateCreated=1/1/2018");
}

#[test]
fn test_create_from_json_values() {
    let values: Values = serde_json::from_str(
        r#"{ "id": "3", "query": { "dateUpdated": "2/1/2018", "dateCreated": "1/1/2018" } }"#,
    )
    .unwrap();
    let url = routes(RouteName::ViewDetails).create(&values).unwrap();
    assert_eq!(url, "/view/3?dateUpdated=2/1/2018&dateCreated=1/1/2018");
}

#[test]
fn test_missing_parameter_fails() {
    init_tracing();
    let err = routes(RouteName::ViewDetails)
        .create(&Values::new())
        .unwrap_err();
    assert!(matches!(err, RouteError::MissingParameter { ref name, .. } if name == "id"));
}

// ============================================================================
// Parse
// ============================================================================

#[rstest]
#[case("/view/3/extra")]
#[case("/view")]
#[case("/edit/3")]
#[case("/view//")]
fn test_parse_mismatch(#[case] path: &str) {
    init_tracing();
    let err = routes(RouteName::ViewDetails).parse(path).unwrap_err();
    assert!(err.is_mismatch(), "{} should not match: {}", path, err);
}

#[test]
fn test_parse_ignores_unknown_query_keys() {
    let parsed = routes(RouteName::ViewDetails)
        .parse("/view/3?dateCreated=1/1/2018&utm_source=mail")
        .unwrap();
    assert_eq!(parsed.param("id"), Some("3"));
    assert_eq!(parsed.query_value("dateCreated"), Some("1/1/2018"));
    assert_eq!(parsed.query_value("utm_source"), None);
    assert_eq!(parsed.query_pairs().count(), 1);
}

#[test]
fn test_parse_tolerates_trailing_slash() {
    let parsed = routes(RouteName::OnlyParam).parse("/1/").unwrap();
    assert_eq!(parsed.param("param"), Some("1"));
}

#[rstest]
#[case(RouteName::ViewMoreDetails, &[("id", "3"), ("otherId", "4")])]
#[case(RouteName::OnlyParam, &[("param", "abc-123")])]
#[case(RouteName::Counts, &[("kitchenId", "k-9"), ("countId", "2024")])]
#[case(RouteName::Home, &[])]
fn test_parse_inverts_create(#[case] name: RouteName, #[case] params: &[(&str, &str)]) {
    let descriptor = routes(name);
    let values: Values = params.iter().copied().collect();

    let url = descriptor.create(&values).unwrap();
    let recovered = descriptor.parse(&url).unwrap().into_values();

    assert_eq!(recovered, values);
}

// ============================================================================
// Tables and route files
// ============================================================================

#[test]
fn test_route_table_recognize() {
    let table = RouteTable::builder()
        .with_route("view_details", routes(RouteName::ViewDetails).clone())
        .with_route("view_more", routes(RouteName::ViewMoreDetails).clone())
        .with_route("only_param", routes(RouteName::OnlyParam).clone())
        .build()
        .unwrap();

    let (key, parsed) = table.recognize("/view/3/more/4").unwrap();
    assert_eq!(key, "view_more");
    assert_eq!(parsed.param("otherId"), Some("4"));

    let (key, _) = table.recognize("/home").unwrap();
    assert_eq!(key, "only_param");

    assert!(table.recognize("/a/b/c").is_none());
}

#[test]
fn test_load_routes_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("routes.toml");
    std::fs::write(
        &file,
        r#"
            [[routes]]
            name = "counts"
            path = "/fcm/inventory/counts/kitchen/:kitchenId/count/:countId"
            query = ["sp", "sd"]
        "#,
    )
    .unwrap();

    let table = RoutesConfig::load(&file).unwrap().into_table().unwrap();
    assert_eq!(table.get("counts"), Some(routes(RouteName::Counts)));

    let url = table
        .create(
            "counts",
            &Values::new()
                .with_param("kitchenId", "k1")
                .with_param("countId", "c1")
                .with_query("sd", "asc"),
        )
        .unwrap();
    assert_eq!(url, "/fcm/inventory/counts/kitchen/k1/count/c1?sd=asc");
}

#[test]
fn test_invalid_routes_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("routes.toml");
    std::fs::write(&file, "[[routes]]\nname = 1\n").unwrap();

    let err = RoutesConfig::load(&file).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse routes file"));
}

#[test]
fn test_descriptors_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RouteDescriptor>();
    assert_send_sync::<RouteTable>();

    let descriptor = routes(RouteName::ViewMoreDetails);
    let urls: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    descriptor
                        .create(&Values::new().with_param("id", i).with_param("otherId", i + 1))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(
        urls,
        vec!["/view/0/more/1", "/view/1/more/2", "/view/2/more/3", "/view/3/more/4"]
    );
}
