//! Request-level routing policy on top of the route table.

use crate::method::HttpMethod;
use crate::router::{accepting_match, all_matches, route_methods, Entries, RouteMatch, RouteTable};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NotFound,
    /// The path is routed, but not for the requested method.
    MethodNotAllowed { allowed: Vec<HttpMethod> },
}

/// Everything that applies to one request, resolved from a single snapshot.
#[derive(Debug)]
pub struct Dispatch<'p, T> {
    /// The Accept header after `*/*` substitution.
    pub accept_type: Option<String>,
    pub before: Vec<RouteMatch<'p, T>>,
    pub route: Option<RouteMatch<'p, T>>,
    pub after: Vec<RouteMatch<'p, T>>,
    pub after_after: Vec<RouteMatch<'p, T>>,
    pub outcome: Outcome,
}

impl<'p, T> Dispatch<'p, T> {
    pub fn is_matched(&self) -> bool {
        self.outcome == Outcome::Matched
    }

    /// Suggested response status for the outcome.
    pub fn status(&self) -> u16 {
        match self.outcome {
            Outcome::Matched => 200,
            Outcome::NotFound => 404,
            Outcome::MethodNotAllowed { .. } => 405,
        }
    }
}

impl<T> RouteTable<T> {
    /// Resolves filters and the route for a request method and decoded uri.
    pub fn dispatch<'p>(
        &self,
        method: HttpMethod,
        uri: &'p str,
        accept: Option<&str>,
    ) -> Dispatch<'p, T> {
        let snapshot = self.entries();
        let entries: &Entries<T> = &snapshot;

        let accept_type = resolve_accept_type(entries, uri, accept);

        let before = all_matches(entries, HttpMethod::Before, uri);
        let route = accepting_match(entries, method, uri, accept_type.as_deref());
        let after = all_matches(entries, HttpMethod::After, uri);
        let after_after = all_matches(entries, HttpMethod::AfterAfter, uri);

        let outcome = if route.is_some() {
            Outcome::Matched
        } else {
            debug!(
                %method,
                uri,
                accept = accept_type.as_deref().unwrap_or(""),
                "requested route has not been mapped"
            );
            let allowed = route_methods(entries, uri);
            if allowed.is_empty() || allowed.contains(&method) {
                Outcome::NotFound
            } else {
                Outcome::MethodNotAllowed { allowed }
            }
        };

        Dispatch {
            accept_type,
            before,
            route,
            after,
            after_after,
            outcome,
        }
    }

    /// Replaces a `*/*` Accept header with the accept type of the first
    /// entry registered under exactly `uri`.
    pub fn resolve_accept_type(&self, uri: &str, accept: Option<&str>) -> Option<String> {
        resolve_accept_type(&self.entries(), uri, accept)
    }
}

fn resolve_accept_type<T>(entries: &Entries<T>, uri: &str, accept: Option<&str>) -> Option<String> {
    if accept == Some("*/*") {
        if let Some(entry) = entries.iter().find(|e| e.path() == uri) {
            return Some(entry.accept_type().to_owned());
        }
    }
    accept.map(str::to_owned)
}
