use http::Method;
use std::fmt;

/// Route registration error
///
/// Returned by [`RouteTrie::insert`](super::RouteTrie::insert) and
/// [`Router::handle`](super::Router::handle). Every variant describes a
/// misconfigured routing table: callers are expected to abort startup rather
/// than serve traffic with a partially registered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route was registered without any handler
    MissingHandlers {
        /// HTTP method of the rejected route
        method: Method,
        /// The rejected route pattern
        pattern: String,
    },
    /// A wildcard or parameter segment overlaps an existing segment of a
    /// different shape at the same trie position
    ///
    /// Either a `:`/`*` segment was registered where a static segment already
    /// exists, or a static (or other-kind wildcard) segment was registered where
    /// a `:`/`*` segment already exists.
    WildcardConflict {
        /// The conflicting segment of the new route (e.g. `:name`)
        wildcard: String,
        /// HTTP method of the rejected route
        method: Method,
        /// The rejected route pattern
        pattern: String,
    },
    /// A route was registered with an empty pattern
    EmptyPattern {
        /// HTTP method of the rejected route
        method: Method,
    },
    /// A route pattern did not begin with `/`
    InvalidPattern {
        /// HTTP method of the rejected route
        method: Method,
        /// The rejected route pattern
        pattern: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingHandlers { method, pattern } => {
                write!(
                    f,
                    "route {}('{}') must be registered with at least one handler",
                    method, pattern
                )
            }
            RouteError::WildcardConflict {
                wildcard,
                method,
                pattern,
            } => {
                write!(
                    f,
                    "wildcard '{}' in route {}('{}') conflicts with existing prefix in trie",
                    wildcard, method, pattern
                )
            }
            RouteError::EmptyPattern { method } => {
                write!(f, "route {}('') has an empty pattern", method)
            }
            RouteError::InvalidPattern { method, pattern } => {
                write!(
                    f,
                    "route {}('{}') must begin with '/'",
                    method, pattern
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}
