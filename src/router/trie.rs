//! Character trie used for HTTP route matching
//!
//! Every edge of the trie is labelled by a single character of a route
//! pattern, so `/users/:id` and `/users/list` share the nodes for `/users/`.
//! Two characters are reserved:
//!
//! - `:` starts a **parameter** segment. The text after `:` up to the next `/`
//!   is the parameter name, recorded per HTTP method on the node that owns the
//!   `:` edge.
//! - `*` starts a **wildcard** segment. The text after `*` up to the next `/`
//!   is a literal suffix (`*.png`, `*_thumb`, `*thumb`) that must follow the
//!   wildcard text in the request. When the wildcard segment ends the route
//!   and its text is an identifier (`/files/*path`), it also names a
//!   catch-all that spans every remaining segment.
//!
//! The tree shape is shared by all HTTP methods; handler chains, parameter
//! names and catch-all names are kept per method.
//!
//! ## Matching
//!
//! A request path is walked character by character. When the walk stops on a
//! missing edge, the remaining path is rewritten so that it can be walked down
//! the `:` or `*` edge instead:
//!
//! ```text
//! registered: /users/:id/posts      request: /users/42/posts
//! walk stops at "/users/"           remaining: "42/posts"
//! rewritten remaining: ":id/posts"  params: id = 42
//! ```
//!
//! The rewritten string always starts with the marker character, so every
//! recursive step walks at least one edge further down the trie and the
//! recursion is bounded by the trie depth.
//!
//! ## Conflicts
//!
//! A `/` node never holds static children together with `:`/`*` children, nor
//! a `:` child together with a `*` child. Registering a route that would break
//! this fails with [`RouteError::WildcardConflict`] and leaves the trie
//! untouched.

use http::Method;
use std::collections::HashMap;
use std::sync::Arc;

use super::core::ParamVec;
use super::error::RouteError;

const PARAM: char = ':';
const WILDCARD: char = '*';
const SLASH: char = '/';

/// Text from the start of `s` up to, but not including, the next `/`.
fn first_segment(s: &str) -> &str {
    match s.find(SLASH) {
        Some(index) => &s[..index],
        None => s,
    }
}

/// Identifier after a trailing `*` that also names a catch-all capture.
fn is_capture_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentShape {
    Static,
    Param,
    Wildcard,
}

impl SegmentShape {
    fn of(segment: &str) -> Self {
        match segment.chars().next() {
            Some(PARAM) => SegmentShape::Param,
            Some(WILDCARD) => SegmentShape::Wildcard,
            _ => SegmentShape::Static,
        }
    }
}

/// One node per distinct character at a given depth.
struct TrieNode<H> {
    children: HashMap<char, TrieNode<H>>,
    /// Parameter name of the `:` child, per method
    param_names: HashMap<Method, Arc<str>>,
    /// Literal suffixes seen after the `*` child, in registration order
    wildcard_suffixes: Vec<String>,
    /// Catch-all name of a trailing `*` child, per method
    catch_all_names: HashMap<Method, Arc<str>>,
    /// Handler chain per method of the routes ending exactly here
    handlers: HashMap<Method, Arc<[H]>>,
}

impl<H> TrieNode<H> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            param_names: HashMap::new(),
            wildcard_suffixes: Vec::new(),
            catch_all_names: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// A route of any method ends here
    fn is_terminal(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Would adding `segment` under this `/` node overlap a segment of another shape?
    fn conflicts_with(&self, segment: &str) -> bool {
        let shape = SegmentShape::of(segment);
        let has_param = self.children.contains_key(&PARAM);
        let has_wildcard = self.children.contains_key(&WILDCARD);
        let has_static = self
            .children
            .keys()
            .any(|key| *key != PARAM && *key != WILDCARD);

        // Absolute path inserted first, then a param or wildcard
        let absolute_first = shape != SegmentShape::Static && has_static;
        // Param or wildcard inserted first, then anything of another shape
        let wildcard_first = (has_param && shape != SegmentShape::Param)
            || (has_wildcard && shape != SegmentShape::Wildcard);

        absolute_first || wildcard_first
    }

    /// Walk the already-built prefix of `route` and return the first segment
    /// that conflicts with it.
    fn find_conflict<'r>(&self, route: &'r str) -> Option<&'r str> {
        let mut node = self;
        for (index, word) in route.char_indices() {
            let child = node.children.get(&word)?;
            if word == SLASH && !child.is_terminal() {
                let segment = first_segment(&route[index + SLASH.len_utf8()..]);
                if !segment.is_empty() && child.conflicts_with(segment) {
                    return Some(segment);
                }
            }
            node = child;
        }
        None
    }

    fn match_from<'t>(
        &'t self,
        path: &str,
        method: &Method,
        params: &mut ParamVec,
    ) -> Option<&'t Arc<[H]>> {
        let mut node = self;
        let mut remain = "";
        for (index, word) in path.char_indices() {
            match node.children.get(&word) {
                Some(child) => node = child,
                None => {
                    remain = &path[index..];
                    break;
                }
            }
        }

        if remain.is_empty() {
            if let Some(handlers) = node.handlers.get(method) {
                return Some(handlers);
            }
        }
        node.match_fallback(remain, method, params)
    }

    fn match_fallback<'t>(
        &'t self,
        remain: &str,
        method: &Method,
        params: &mut ParamVec,
    ) -> Option<&'t Arc<[H]>> {
        let segment = first_segment(remain);
        let tail = &remain[segment.len()..];
        let mark = params.len();

        if self.children.contains_key(&PARAM) {
            // An empty segment binds an empty value: "/users/" matches "/users/:id"
            if let Some(name) = self.param_names.get(method).filter(|name| !name.is_empty()) {
                params.push((Arc::clone(name), segment.to_owned()));
                let rewritten = format!("{PARAM}{name}{tail}");
                let found = self.match_from(&rewritten, method, params);
                if found.is_none() {
                    params.truncate(mark);
                }
                return found;
            }
        }

        if !self.children.contains_key(&WILDCARD) {
            return None;
        }

        let catch_all = self.catch_all_names.get(method);
        let suffix_hit = self.wildcard_suffixes.iter().find_map(|suffix| {
            segment
                .find(suffix.as_str())
                .map(|index| (suffix.as_str(), index))
        });
        let rewritten = match suffix_hit {
            // "/before/*_after/rest": keep the suffix, the wildcard eats the rest of the segment
            Some((suffix, index)) => {
                let kept = &remain[index..];
                // "/files/*path" reached through its own text still binds the capture
                let own_name = catch_all.filter(|name| name.as_ref() == suffix);
                if let Some(name) = own_name.filter(|_| kept == suffix) {
                    params.push((Arc::clone(name), remain.to_owned()));
                }
                format!("{WILDCARD}{kept}")
            }
            // "/before/*/rest": the wildcard eats the segment
            None if !tail.is_empty() => format!("{WILDCARD}{tail}"),
            // "/before/*": the wildcard eats everything
            None => WILDCARD.to_string(),
        };
        if let Some(found) = self.match_from(&rewritten, method, params) {
            return Some(found);
        }
        params.truncate(mark);

        // "/before/*name" ending the route: the wildcard eats every remaining segment
        let name = catch_all?;
        params.push((Arc::clone(name), remain.to_owned()));
        let rewritten = format!("{WILDCARD}{name}");
        let found = self.match_from(&rewritten, method, params);
        if found.is_none() {
            params.truncate(mark);
        }
        found
    }
}

/// Character trie mapping route patterns to handler chains.
///
/// The trie is built once with [`insert`](Self::insert) and then only read by
/// [`match_path`](Self::match_path), which takes `&self`; a fully built trie can
/// be shared across threads when `H` is `Send + Sync`.
pub struct RouteTrie<H> {
    root: TrieNode<H>,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// `true` if no route has been inserted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Register `route` for `method` with an ordered handler chain.
    ///
    /// Registering the same pattern and method again replaces its handler
    /// chain, and a parameter or catch-all name registered again under the
    /// same method replaces the previous name. Other methods are unaffected.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MissingHandlers`] if `handlers` is empty
    /// - [`RouteError::EmptyPattern`] if `route` is empty
    /// - [`RouteError::WildcardConflict`] if a segment of `route` overlaps an
    ///   existing segment of another shape (static vs `:` vs `*`)
    ///
    /// The trie is unchanged when an error is returned.
    pub fn insert(
        &mut self,
        route: &str,
        method: &Method,
        handlers: Vec<H>,
    ) -> Result<(), RouteError> {
        if handlers.is_empty() {
            return Err(RouteError::MissingHandlers {
                method: method.clone(),
                pattern: route.to_owned(),
            });
        }
        if route.is_empty() {
            return Err(RouteError::EmptyPattern {
                method: method.clone(),
            });
        }
        if let Some(wildcard) = self.root.find_conflict(route) {
            return Err(RouteError::WildcardConflict {
                wildcard: wildcard.to_owned(),
                method: method.clone(),
                pattern: route.to_owned(),
            });
        }

        let mut node = &mut self.root;
        for (index, word) in route.char_indices() {
            let rest = &route[index + word.len_utf8()..];
            let text = first_segment(rest);
            match word {
                PARAM => {
                    node.param_names.insert(method.clone(), Arc::from(text));
                }
                WILDCARD => {
                    if !text.is_empty() {
                        node.wildcard_suffixes.push(text.to_owned());
                    }
                    if text.len() == rest.len() && is_capture_name(text) {
                        node.catch_all_names.insert(method.clone(), Arc::from(text));
                    }
                }
                _ => {}
            }
            node = node.children.entry(word).or_insert_with(TrieNode::new);
        }
        node.handlers.insert(method.clone(), handlers.into());
        Ok(())
    }

    /// Resolve `path` to the handler chain of a registered route.
    ///
    /// Parameter and catch-all values are appended to `params`; on a miss
    /// `params` is left as it was. An exact character match always wins over
    /// parameter and wildcard fallbacks.
    pub fn match_path(
        &self,
        path: &str,
        method: &Method,
        params: &mut ParamVec,
    ) -> Option<&Arc<[H]>> {
        self.root.match_from(path, method, params)
    }
}
