//! # Router Module
//!
//! Path matching and route resolution. Routes are stored in a character trie
//! ([`RouteTrie`]) shared by every HTTP method of a [`Router`].
//!
//! ## Route patterns
//!
//! | Pattern | Matches | Params |
//! |---------|---------|--------|
//! | `/users` | `/users` | |
//! | `/users/:id` | `/users/42` | `id = 42` |
//! | `/files/*path` | `/files/a/b/c` | `path = a/b/c` |
//! | `/files/*.png` | `/files/logo.png` | |
//! | `/img/*thumb/view` | `/img/catthumb/view` | |
//! | `/assets/*/meta` | `/assets/logo/meta` | |
//!
//! The text after `*` is a literal suffix bounded by one segment (`*.png`,
//! `*thumb`). A trailing `*` followed by an identifier (`*path`) is also a
//! named catch-all that spans any number of segments. A bare `*` swallows
//! exactly one segment, or the rest of the path when it is last.
//!
//! ## Lifecycle
//!
//! 1. **Registration**: at startup, routes are added with [`Router::handle`]
//!    or the method shortcuts. Overlapping static and wildcard segments are
//!    rejected across all methods with [`RouteError::WildcardConflict`]; a route without handlers
//!    is rejected with [`RouteError::MissingHandlers`]. Treat both as fatal.
//!
//! 2. **Matching**: for each request, [`Router::route`] walks the trie with the
//!    request method and returns the handler chain and path parameters. The
//!    router is never mutated here, so it can be shared by any number of
//!    workers.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! # fn main() -> Result<(), trierouter::router::RouteError> {
//! let mut router = Router::new();
//! router.get("/users/:id", vec!["auth", "get_user"])?;
//! router.get("/files/*path", vec!["serve_file"])?;
//!
//! let m = router.route(Method::GET, "/users/42").expect("route");
//! assert_eq!(&m.handlers[..], &["auth", "get_user"]);
//! assert_eq!(m.get_path_param("id"), Some("42"));
//!
//! let m = router.route(Method::GET, "/files/docs/readme.md").expect("route");
//! assert_eq!(m.get_path_param("path"), Some("docs/readme.md"));
//!
//! assert!(router.route(Method::DELETE, "/users/42").is_none());
//! assert_eq!(router.allowed_methods("/users/42"), vec![Method::GET]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! Matching is O(k) in the path length for static routes; each `:`/`*`
//! fallback re-walks at most the rewritten remainder, so the cost stays
//! independent of the number of registered routes.

mod core;
mod error;
mod trie;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use error::RouteError;
pub use trie::RouteTrie;
