use http::Method;
use std::io::Write;
use trierouter::{runtime_config::RuntimeConfig, RouteTable};

#[test]
fn test_load_route_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[route]]
method = "GET"
pattern = "/users/:id"
handlers = ["auth", "get_user"]
"#
    )
    .unwrap();

    let table = RouteTable::from_path(file.path()).unwrap();
    let router = table
        .build_router_with_config(RuntimeConfig::default())
        .unwrap();
    let m = router.route(Method::GET, "/users/abc").unwrap();
    assert_eq!(m.handlers.to_vec(), vec!["auth", "get_user"]);
    assert_eq!(m.get_path_param("id"), Some("abc"));
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = RouteTable::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[route]\nmethod = ").unwrap();
    let err = RouteTable::from_path(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid route table"));
}

#[test]
fn test_sample_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/routes.toml");
    let router = RouteTable::from_path(path)
        .unwrap()
        .build_router_with_config(RuntimeConfig::default())
        .unwrap();
    assert!(router.route(Method::GET, "/files/docs/readme.md").is_some());
    assert!(router.route(Method::GET, "/thumbs/cat_thumb/view").is_some());
    assert!(router.route(Method::DELETE, "/users/1").is_some());
}
