#![forbid(unsafe_code)]

//! Extraction of the routing inputs from an [`http::Request`].

use crate::dispatch::Dispatch;
use crate::method::HttpMethod;
use crate::router::{RouteTable, RouterError};

use std::borrow::Cow;
use std::string::FromUtf8Error;

use http::header::ACCEPT;
use http::Request;

pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// The parts of a request the route table looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub method: HttpMethod,
    /// Percent-decoded uri path.
    pub path: String,
    pub accept: Option<String>,
}

impl RequestTarget {
    pub fn from_request<B>(req: &Request<B>) -> Result<Self, RouterError> {
        let method = request_method(req)?;
        let path = decode_path(req.uri().path())?.into_owned();
        let accept = req
            .headers()
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Ok(Self {
            method,
            path,
            accept,
        })
    }
}

/// The request method, honouring `X-HTTP-Method-Override`. Filter phases
/// are not request methods and are rejected.
pub fn request_method<B>(req: &Request<B>) -> Result<HttpMethod, RouterError> {
    let name = req
        .headers()
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| req.method().as_str());

    let method: HttpMethod = name.trim().parse()?;
    if method.is_filter() {
        return Err(RouterError::UnsupportedMethod(name.to_owned()));
    }
    Ok(method)
}

/// Form-style decoding: `+` is a space, `%2B` a literal plus.
pub fn decode_path(path: &str) -> Result<Cow<'_, str>, RouterError> {
    let invalid = |_: FromUtf8Error| RouterError::InvalidUri(path.to_owned());
    if path.contains('+') {
        let spaced = path.replace('+', " ");
        let decoded = urlencoding::decode(&spaced).map_err(invalid)?;
        return Ok(Cow::Owned(decoded.into_owned()));
    }
    urlencoding::decode(path).map_err(invalid)
}

impl<T> RouteTable<T> {
    pub fn dispatch_request<'p>(&self, target: &'p RequestTarget) -> Dispatch<'p, T> {
        self.dispatch(target.method, &target.path, target.accept.as_deref())
    }
}
