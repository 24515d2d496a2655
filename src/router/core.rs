//! Router core module - hot path for request routing.
//!
//! The per-request path ([`Router::route`]) only reads the tries built at
//! startup. Parameter values are the only per-request allocation, and they
//! stay on the stack for routes with up to [`MAX_INLINE_PARAMS`] parameters.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::error::RouteError;
use super::trie::RouteTrie;
use crate::runtime_config::RuntimeConfig;

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/:id/posts/:post_id).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Param names use `Arc<str>` because they come from the route trie (known at
/// startup); values are per-request data taken from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route
#[derive(Debug)]
pub struct RouteMatch<H> {
    /// Ordered handler chain bound to the matched route
    pub handlers: Arc<[H]>,
    /// Path parameters extracted from the URL (e.g., `:id` → `("id", "123")`)
    pub path_params: ParamVec,
}

impl<H> Clone for RouteMatch<H> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            path_params: self.path_params.clone(),
        }
    }
}

impl<H> RouteMatch<H> {
    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics: if the same name is captured at two
    /// depths (e.g. `/org/:id/user/:id`), the deeper value is returned.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to HashMap
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Router that matches HTTP requests to handler chains
///
/// All methods share one [`RouteTrie`], and a path position has the same shape
/// for every method, so `GET /items/:id` followed by
/// `DELETE /items/*rest` is rejected as a conflict. Handler chains and
/// parameter names stay per method, so `GET /items/:id` and
/// `POST /items/:itemId` capture under their own names.
///
/// Build the router once at startup, then share it (e.g. behind an `Arc`)
/// with request workers. [`Router::route`] takes `&self` and never mutates.
pub struct Router<H> {
    trie: RouteTrie<H>,
    /// Registered (method, pattern) pairs in registration order
    routes: Vec<(Method, String)>,
    slow_match_threshold: Duration,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Create an empty router with configuration from the environment
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::from_env())
    }

    /// Create an empty router with explicit configuration
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            trie: RouteTrie::new(),
            routes: Vec::new(),
            slow_match_threshold: config.slow_match_threshold(),
        }
    }

    /// Register a handler chain for `method` and `pattern`.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if the pattern does not start with `/`, has no
    /// handlers, or conflicts with an already registered pattern of any
    /// method. Callers should treat any error as fatal for startup.
    pub fn handle(
        &mut self,
        method: Method,
        pattern: &str,
        handlers: Vec<H>,
    ) -> Result<(), RouteError> {
        if !pattern.is_empty() && !pattern.starts_with('/') {
            let err = RouteError::InvalidPattern {
                method,
                pattern: pattern.to_owned(),
            };
            error!(error = %err, "Route registration rejected");
            return Err(err);
        }

        let handlers_count = handlers.len();
        let result = self.trie.insert(pattern, &method, handlers);

        match result {
            Ok(()) => {
                debug!(
                    method = %method,
                    pattern = %pattern,
                    handlers_count,
                    "Route registered"
                );
                let key = (method, pattern.to_owned());
                if !self.routes.contains(&key) {
                    self.routes.push(key);
                }
                Ok(())
            }
            Err(err) => {
                error!(
                    method = %method,
                    pattern = %pattern,
                    error = %err,
                    "Route registration rejected"
                );
                Err(err)
            }
        }
    }

    /// Shortcut for `handle(Method::GET, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn get(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::GET, pattern, handlers)
    }

    /// Shortcut for `handle(Method::POST, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn post(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::POST, pattern, handlers)
    }

    /// Shortcut for `handle(Method::PUT, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn put(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::PUT, pattern, handlers)
    }

    /// Shortcut for `handle(Method::PATCH, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn patch(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::PATCH, pattern, handlers)
    }

    /// Shortcut for `handle(Method::DELETE, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn delete(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::DELETE, pattern, handlers)
    }

    /// Shortcut for `handle(Method::HEAD, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn head(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::HEAD, pattern, handlers)
    }

    /// Shortcut for `handle(Method::OPTIONS, pattern, handlers)`
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn options(&mut self, pattern: &str, handlers: Vec<H>) -> Result<(), RouteError> {
        self.handle(Method::OPTIONS, pattern, handlers)
    }

    /// Match an HTTP request to a route
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the handler chain and extracted path parameters
    /// * `None` - no route matches (the caller answers 404, or 405 when
    ///   [`Router::allowed_methods`] is non-empty)
    ///
    /// # Example
    ///
    /// ```rust
    /// use trierouter::router::Router;
    ///
    /// let mut router = Router::new();
    /// router.get("/users/:id", vec!["get_user"]).unwrap();
    ///
    /// let m = router.route(http::Method::GET, "/users/123").unwrap();
    /// assert_eq!(&m.handlers[..], &["get_user"]);
    /// assert_eq!(m.get_path_param("id"), Some("123"));
    /// ```
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch<H>> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let mut path_params = ParamVec::new();
        let handlers = self
            .trie
            .match_path(path, &method, &mut path_params)
            .map(Arc::clone);
        let match_duration = match_start.elapsed();

        let Some(handlers) = handlers else {
            warn!(
                method = %method,
                path = %path,
                duration_us = match_duration.as_micros(),
                "No route matched"
            );
            return None;
        };

        if match_duration > self.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                path_params = ?path_params,
                handlers_count = handlers.len(),
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        } else {
            info!(
                method = %method,
                path = %path,
                path_params = ?path_params,
                handlers_count = handlers.len(),
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
        }

        Some(RouteMatch {
            handlers,
            path_params,
        })
    }

    /// Methods with a route matching `path`, in registration order
    ///
    /// Useful to build the `Allow` header of a 405 response.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut seen: Vec<&Method> = Vec::new();
        let mut allowed: Vec<Method> = Vec::new();
        for (method, _) in &self.routes {
            if seen.contains(&method) {
                continue;
            }
            seen.push(method);
            let mut scratch = ParamVec::new();
            if self.trie.match_path(path, method, &mut scratch).is_some() {
                allowed.push(method.clone());
            }
        }
        allowed
    }

    /// Number of distinct (method, pattern) pairs registered
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Registered (method, pattern) pairs in registration order
    #[must_use]
    pub fn routes(&self) -> &[(Method, String)] {
        &self.routes
    }

    /// Log every registered route
    ///
    /// Emits one summary event and one event per route at `info`.
    pub fn dump_routes(&self) {
        info!(routes_count = self.routes.len(), "Routing table");
        for (method, pattern) in &self.routes {
            info!(method = %method, pattern = %pattern, "Route");
        }
    }
}
