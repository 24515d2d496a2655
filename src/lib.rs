//! # trierouter
//!
//! **trierouter** is a character-trie HTTP path router. Routes are registered
//! once at startup as (method, pattern) pairs bound to an ordered chain of
//! handler values; at request time the router resolves an incoming
//! (method, path) pair to that chain and the named path parameters.
//!
//! ## Overview
//!
//! - **[`router`]** - the route trie, the [`Router`](router::Router)
//!   and registration errors
//! - **[`route_table`]** - declarative TOML route tables
//! - **[`runtime_config`]** - environment-driven tuning
//! - **[`logging`]** - `tracing-subscriber` setup for the router's events
//!
//! The router never calls handlers: `H` is any value the surrounding dispatch
//! layer wants back (a function pointer, a boxed middleware, a handler name).
//!
//! ### Request flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Server
//!     participant Router
//!     participant Trie as RouteTrie
//!
//!     Server->>Router: route(method, path)
//!     Router->>Trie: match_path(path, params)
//!     Trie->>Trie: walk characters
//!     alt walk stops on a missing edge
//!         Trie->>Trie: ":" fallback (capture segment)
//!         Trie->>Trie: "*" fallback (suffix / segment / catch-all)
//!     end
//!     Trie-->>Router: handler chain + params
//!     Router-->>Server: Some(RouteMatch) or None (404)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! let mut router = Router::new();
//! router.get("/users/:id", vec!["auth", "get_user"]).expect("valid route");
//! router.get("/img/*.png", vec!["png"]).expect("valid route");
//!
//! let m = router.route(Method::GET, "/users/42").expect("matched");
//! assert_eq!(m.get_path_param("id"), Some("42"));
//!
//! let m = router.route(Method::GET, "/img/logo.png").expect("matched");
//! assert_eq!(&m.handlers[..], &["png"]);
//! ```
//!
//! ## Registration errors
//!
//! A static segment and a `:`/`*` segment can never share a position in the
//! trie, whatever their methods. Registering both is reported as
//! [`RouteError::WildcardConflict`](router::RouteError::WildcardConflict)
//! instead of silently picking a precedence; together with
//! [`RouteError::MissingHandlers`](router::RouteError::MissingHandlers) it
//! signals a misconfigured routing table, and callers should abort startup.
//!
//! ## Runtime Considerations
//!
//! Matching is synchronous and allocation-light. Register every route before
//! serving traffic; after that the router is read-only and can be shared
//! across threads with an `Arc`.

pub mod logging;
pub mod route_table;
pub mod router;
pub mod runtime_config;

pub use route_table::{RouteEntry, RouteTable};
pub use router::{RouteError, RouteMatch, Router};
