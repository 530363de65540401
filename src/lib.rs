#![deny(unsafe_code)]

//! An ordered HTTP route table.
//!
//! Routes and before/after/after-after filters are registered with a method,
//! a path pattern and an optional accept type. Lookups scan in registration
//! order: the first matching route wins, while every matching filter runs.
//!
//! Pattern dialects:
//! - literal paths: `/hello/world`
//! - named parameters: `/users/:id`
//! - optional trailing parameters: `/test/:name?`
//! - wildcards: `/files/*`
//! - optional trailing slash: `/dir/?`
//! - regular expressions, prefixed with `~/`: `~/^\/(?<topic>[^-]+)-(\d+)$/`
//!
//! A path starting with `~/` is always read as a regex.

mod dispatch;
mod macros;
mod method;
mod path;
mod router;

pub mod mime;

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "config")]
pub mod config;

pub use crate::dispatch::{Dispatch, Outcome};
pub use crate::method::HttpMethod;
pub use crate::path::{ALL_PATHS, DEFAULT_ACCEPT_TYPE};
pub use crate::router::{
    Params, PatternKind, RouteEntry, RouteMatch, RoutePattern, RouteTable, RouterError, Segment,
};
