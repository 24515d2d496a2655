//! # Route Table
//!
//! Declarative route registration from a TOML file. Each `[[route]]` entry
//! names a method, a pattern and an ordered list of handler names:
//!
//! ```toml
//! [[route]]
//! method = "GET"
//! pattern = "/users/:id"
//! handlers = ["auth", "get_user"]
//!
//! [[route]]
//! method = "GET"
//! pattern = "/files/*path"
//! handlers = ["serve_file"]
//! ```
//!
//! Entries are registered in file order, so for an identical (method, pattern)
//! pair the last entry wins, and a conflicting entry aborts the whole load.

use anyhow::{Context, Result};
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::router::Router;
use crate::runtime_config::RuntimeConfig;

/// One `[[route]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// HTTP method, case-insensitive (`GET`, `post`, or an extension method)
    pub method: String,
    /// Route pattern, e.g. `/users/:id`
    pub pattern: String,
    /// Ordered handler chain
    #[serde(default)]
    pub handlers: Vec<String>,
}

impl RouteEntry {
    /// Parse the method name
    ///
    /// # Errors
    ///
    /// Fails if the name is not a valid HTTP method token.
    pub fn method(&self) -> Result<Method> {
        Method::from_bytes(self.method.to_uppercase().as_bytes())
            .with_context(|| format!("Invalid HTTP method '{}'", self.method))
    }
}

/// A parsed route table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Parse a route table from TOML text
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or missing `method`/`pattern` keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse route table")
    }

    /// Read and parse a route table file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid route table {}", path.display()))
    }

    /// Register every entry into a new router with configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an invalid method or a registration
    /// error (see [`crate::router::RouteError`]).
    pub fn build_router(&self) -> Result<Router<String>> {
        self.build_router_with_config(RuntimeConfig::from_env())
    }

    /// Register every entry into a new router with explicit configuration
    ///
    /// # Errors
    ///
    /// See [`RouteTable::build_router`].
    pub fn build_router_with_config(&self, config: RuntimeConfig) -> Result<Router<String>> {
        let mut router = Router::with_config(config);
        for (index, entry) in self.routes.iter().enumerate() {
            let method = entry.method()?;
            router
                .handle(method, &entry.pattern, entry.handlers.clone())
                .with_context(|| {
                    format!(
                        "Failed to register route #{} ({} {})",
                        index + 1,
                        entry.method,
                        entry.pattern
                    )
                })?;
        }
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteError;

    const TABLE: &str = r#"
[[route]]
method = "GET"
pattern = "/users/:id"
handlers = ["auth", "get_user"]

[[route]]
method = "post"
pattern = "/users"
handlers = ["auth", "create_user"]
"#;

    #[test]
    fn test_parse_table() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.routes.len(), 2);
        assert_eq!(table.routes[0].handlers, vec!["auth", "get_user"]);
        assert_eq!(table.routes[1].method().unwrap(), Method::POST);
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::from_toml_str("").unwrap();
        assert!(table.routes.is_empty());
        assert_eq!(table.build_router().unwrap().route_count(), 0);
    }

    #[test]
    fn test_build_router() {
        let router = RouteTable::from_toml_str(TABLE)
            .unwrap()
            .build_router_with_config(RuntimeConfig::default())
            .unwrap();
        let m = router.route(Method::GET, "/users/7").unwrap();
        assert_eq!(&m.handlers[..], &["auth".to_string(), "get_user".to_string()]);
        assert_eq!(m.get_path_param("id"), Some("7"));
        assert!(router.route(Method::POST, "/users").is_some());
    }

    #[test]
    fn test_missing_handlers_is_rejected() {
        let table = RouteTable::from_toml_str(
            r#"
[[route]]
method = "GET"
pattern = "/health"
"#,
        )
        .unwrap();
        let err = table
            .build_router()
            .err()
            .expect("a route without handlers must be rejected");
        assert!(matches!(
            err.downcast_ref::<RouteError>(),
            Some(RouteError::MissingHandlers { .. })
        ));
        assert!(format!("{err:#}").contains("route #1"));
    }

    #[test]
    fn test_invalid_method() {
        let table = RouteTable::from_toml_str(
            r#"
[[route]]
method = "GE T"
pattern = "/health"
handlers = ["health"]
"#,
        )
        .unwrap();
        assert!(table.build_router().is_err());
    }

    #[test]
    fn test_missing_pattern_fails_to_parse() {
        assert!(RouteTable::from_toml_str("[[route]]\nmethod = \"GET\"\n").is_err());
    }
}
