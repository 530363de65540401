use super::entry::{RouteEntry, RouteMatch};
use super::error::RouterError;

use crate::method::HttpMethod;
use crate::mime;

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use tracing::{debug, info, trace};

pub(crate) type Entries<T> = [Arc<RouteEntry<T>>];

/// An insertion-ordered table of routes and filters.
///
/// Lookups read an immutable snapshot and never lock. Registration and
/// [`clear`](RouteTable::clear) publish a new snapshot under a writer lock,
/// so a concurrent lookup sees a table either with or without a new entry.
#[derive(Debug)]
pub struct RouteTable<T> {
    entries: ArcSwap<Vec<Arc<RouteEntry<T>>>>,
    write_lock: Mutex<()>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn register(&self, entry: RouteEntry<T>) -> &Self {
        debug!(
            method = %entry.method(),
            pattern = entry.path(),
            kind = ?entry.pattern().kind(),
            accept_type = entry.accept_type(),
            "route registered"
        );
        let entry = Arc::new(entry);

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.entries.load();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(entry);
        self.entries.store(Arc::new(next));
        self
    }

    pub fn insert(&self, method: HttpMethod, pattern: &str, target: T) -> &Self {
        if let Err(e) = self.try_insert(method, pattern, target) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(
        &self,
        method: HttpMethod,
        pattern: &str,
        target: T,
    ) -> Result<&Self, RouterError> {
        let entry = RouteEntry::new(method, pattern, target)?;
        Ok(self.register(entry))
    }

    pub fn try_insert_with_accept(
        &self,
        method: HttpMethod,
        pattern: &str,
        accept_type: &str,
        target: T,
    ) -> Result<&Self, RouterError> {
        let entry = RouteEntry::new(method, pattern, target)?.with_accept_type(accept_type);
        Ok(self.register(entry))
    }

    /// Discards every entry.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let discarded = self.entries.swap(Arc::new(Vec::new())).len();
        info!(discarded, "route table cleared");
    }

    /// The current snapshot, in registration order.
    pub fn entries(&self) -> Arc<Vec<Arc<RouteEntry<T>>>> {
        self.entries.load_full()
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// The first registered entry matching `method` and `uri`.
    pub fn find_first<'p>(&self, method: HttpMethod, uri: &'p str) -> Option<RouteMatch<'p, T>> {
        first_match(&self.entries.load(), method, uri)
    }

    /// Every matching entry in registration order. Used to run all filters
    /// of one phase.
    pub fn find_all_matching<'p>(&self, method: HttpMethod, uri: &'p str) -> Vec<RouteMatch<'p, T>> {
        all_matches(&self.entries.load(), method, uri)
    }

    /// Entries of any method whose registered pattern equals `uri` verbatim.
    pub fn find_all_by_literal_path(&self, uri: &str) -> Vec<Arc<RouteEntry<T>>> {
        self.entries
            .load()
            .iter()
            .filter(|e| e.path() == uri)
            .cloned()
            .collect()
    }

    /// Distinct request methods having a route that matches `uri`.
    pub fn find_methods(&self, uri: &str) -> Vec<HttpMethod> {
        route_methods(&self.entries.load(), uri)
    }

    /// The matching entry whose accept type best fits the `accept` header.
    /// Without a header this is [`find_first`](RouteTable::find_first).
    pub fn find_accepting<'p>(
        &self,
        method: HttpMethod,
        uri: &'p str,
        accept: Option<&str>,
    ) -> Option<RouteMatch<'p, T>> {
        accepting_match(&self.entries.load(), method, uri, accept)
    }
}

pub(crate) fn first_match<'p, T>(
    entries: &Entries<T>,
    method: HttpMethod,
    uri: &'p str,
) -> Option<RouteMatch<'p, T>> {
    entries.iter().find_map(|entry| {
        let params = entry.matches(method, uri)?;
        trace!(%method, uri, pattern = entry.path(), "route matched");
        Some(RouteMatch::new(Arc::clone(entry), params, uri))
    })
}

pub(crate) fn all_matches<'p, T>(
    entries: &Entries<T>,
    method: HttpMethod,
    uri: &'p str,
) -> Vec<RouteMatch<'p, T>> {
    entries
        .iter()
        .filter_map(|entry| {
            let params = entry.matches(method, uri)?;
            trace!(%method, uri, pattern = entry.path(), "route matched");
            Some(RouteMatch::new(Arc::clone(entry), params, uri))
        })
        .collect()
}

pub(crate) fn route_methods<T>(entries: &Entries<T>, uri: &str) -> Vec<HttpMethod> {
    let mut methods: Vec<HttpMethod> = Vec::new();
    for entry in entries {
        let method = entry.method();
        if method.is_filter() || methods.contains(&method) {
            continue;
        }
        if entry.pattern().matches(uri).is_some() {
            methods.push(method);
        }
    }
    methods
}

pub(crate) fn accepting_match<'p, T>(
    entries: &Entries<T>,
    method: HttpMethod,
    uri: &'p str,
    accept: Option<&str>,
) -> Option<RouteMatch<'p, T>> {
    let accept = match accept {
        Some(a) => a,
        None => return first_match(entries, method, uri),
    };

    let matches = all_matches(entries, method, uri);

    // each distinct accept type stands for the first entry declaring it
    let chosen: usize = {
        let mut types: Vec<(&str, usize)> = Vec::new();
        for (i, m) in matches.iter().enumerate() {
            let ty = m.accept_type();
            if types.iter().all(|&(t, _)| t != ty) {
                types.push((ty, i));
            }
        }
        let best = mime::best_match(types.iter().map(|&(t, _)| t), accept)?;
        types[best].1
    };

    matches.into_iter().nth(chosen)
}
