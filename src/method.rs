use crate::router::RouterError;

use std::fmt;
use std::str::FromStr;

/// Request methods plus the three filter phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Trace,
    Connect,
    Options,
    Before,
    After,
    AfterAfter,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Trace => "trace",
            Self::Connect => "connect",
            Self::Options => "options",
            Self::Before => "before",
            Self::After => "after",
            Self::AfterAfter => "afterafter",
        }
    }

    #[inline]
    pub fn is_filter(self) -> bool {
        matches!(self, Self::Before | Self::After | Self::AfterAfter)
    }
}

impl FromStr for HttpMethod {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let m = match s.to_ascii_lowercase().as_str() {
            "get" => Self::Get,
            "post" => Self::Post,
            "put" => Self::Put,
            "patch" => Self::Patch,
            "delete" => Self::Delete,
            "head" => Self::Head,
            "trace" => Self::Trace,
            "connect" => Self::Connect,
            "options" => Self::Options,
            "before" => Self::Before,
            "after" => Self::After,
            "afterafter" | "after_after" => Self::AfterAfter,
            _ => return Err(RouterError::UnsupportedMethod(s.to_owned())),
        };
        Ok(m)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
