use super::error::RouterError;
use super::params::Params;
use super::pattern::RoutePattern;

use crate::method::HttpMethod;
use crate::path::{ALL_PATHS, DEFAULT_ACCEPT_TYPE};

use std::sync::Arc;

/// One registered route or filter.
#[derive(Debug)]
pub struct RouteEntry<T> {
    method: HttpMethod,
    pattern: RoutePattern,
    accept_type: Box<str>,
    target: T,
}

impl<T> RouteEntry<T> {
    pub fn new(method: HttpMethod, pattern: &str, target: T) -> Result<Self, RouterError> {
        Ok(Self {
            method,
            pattern: RoutePattern::compile(pattern)?,
            accept_type: DEFAULT_ACCEPT_TYPE.into(),
            target,
        })
    }

    /// A filter running for every path in the given phase.
    pub fn filter_all(method: HttpMethod, target: T) -> Result<Self, RouterError> {
        Self::new(method, ALL_PATHS, target)
    }

    pub fn with_accept_type(mut self, accept_type: &str) -> Self {
        self.accept_type = accept_type.into();
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The pattern as registered.
    pub fn path(&self) -> &str {
        self.pattern.raw()
    }

    pub fn accept_type(&self) -> &str {
        &self.accept_type
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn matches<'p>(&self, method: HttpMethod, uri: &'p str) -> Option<Params<'p>> {
        if self.method != method {
            return None;
        }
        if method.is_filter() && self.pattern.raw() == ALL_PATHS {
            return Some(Params::new());
        }
        self.pattern.matches(uri)
    }
}

/// A matched entry together with the values bound from the uri.
#[derive(Debug)]
pub struct RouteMatch<'p, T> {
    entry: Arc<RouteEntry<T>>,
    params: Params<'p>,
    uri: &'p str,
}

impl<'p, T> RouteMatch<'p, T> {
    pub(crate) fn new(entry: Arc<RouteEntry<T>>, params: Params<'p>, uri: &'p str) -> Self {
        Self { entry, params, uri }
    }

    pub fn entry(&self) -> &Arc<RouteEntry<T>> {
        &self.entry
    }

    pub fn target(&self) -> &T {
        self.entry.target()
    }

    pub fn params(&self) -> &Params<'p> {
        &self.params
    }

    /// The registered pattern that matched.
    pub fn matched_path(&self) -> &str {
        self.entry.path()
    }

    pub fn accept_type(&self) -> &str {
        self.entry.accept_type()
    }

    pub fn uri(&self) -> &'p str {
        self.uri
    }

    pub fn into_parts(self) -> (Arc<RouteEntry<T>>, Params<'p>) {
        (self.entry, self.params)
    }
}
