use super::error::RouterError;
use crate::path::{clean_regex, split_segments, COLON, OPTIONAL_SLASH, REGEX_PREFIX, SLASH, STAR};

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Literal,
    Segmented,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(Box<str>),
    Param(Arc<str>),
    OptionalParam(Arc<str>),
    Wildcard,
}

/// A compiled path pattern.
///
/// Patterns starting with `~/` are case-insensitive regular expressions,
/// searched anywhere in the uri. Every other pattern is split on `/` into
/// static text, `:name` parameters, `:name?` optional parameters and `*`
/// wildcards. A final `/?` makes the trailing slash optional.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: Box<str>,
    pub(super) repr: Repr,
}

#[derive(Debug, Clone)]
pub(super) enum Repr {
    Path(PathPattern),
    Regex(RegexPattern),
}

#[derive(Debug, Clone)]
pub(super) struct PathPattern {
    pub(super) segments: Vec<Segment>,
    pub(super) literal: bool,
    pub(super) optional_slash: bool,
    pub(super) slash_tail: bool,
    pub(super) wildcard_tail: bool,
}

#[derive(Debug, Clone)]
pub(super) struct RegexPattern {
    pub(super) regex: Regex,
    /// `(index, name)` of capture groups 1..=N.
    pub(super) groups: Vec<(Arc<str>, Option<Arc<str>>)>,
}

impl RoutePattern {
    pub fn compile(raw: &str) -> Result<Self, RouterError> {
        let repr = if raw.starts_with(REGEX_PREFIX) {
            Repr::Regex(RegexPattern::compile(raw)?)
        } else {
            Repr::Path(PathPattern::compile(raw))
        };
        Ok(Self {
            raw: raw.into(),
            repr,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> PatternKind {
        match self.repr {
            Repr::Regex(_) => PatternKind::Regex,
            Repr::Path(ref p) if p.literal => PatternKind::Literal,
            Repr::Path(_) => PatternKind::Segmented,
        }
    }

    /// Segment descriptors; empty for regex patterns.
    pub fn segments(&self) -> &[Segment] {
        match self.repr {
            Repr::Path(ref p) => &p.segments,
            Repr::Regex(_) => &[],
        }
    }

    pub fn has_optional_slash(&self) -> bool {
        match self.repr {
            Repr::Path(ref p) => p.optional_slash,
            Repr::Regex(_) => false,
        }
    }
}

impl PathPattern {
    fn compile(raw: &str) -> Self {
        let mut parts = split_segments(raw);

        // "" is the root alias and accepts both "" and "/"
        let mut optional_slash = raw.is_empty();
        if parts.last() == Some(&OPTIONAL_SLASH) {
            parts.pop();
            optional_slash = true;
        }

        let segments: Vec<Segment> = parts.iter().map(|&part| Segment::parse(part)).collect();

        let wildcard_tail = raw.ends_with(STAR);
        let literal = !optional_slash
            && !wildcard_tail
            && segments.iter().all(|s| matches!(s, Segment::Static(_)));

        Self {
            segments,
            literal,
            optional_slash,
            slash_tail: raw.ends_with(SLASH),
            wildcard_tail,
        }
    }
}

impl Segment {
    fn parse(part: &str) -> Self {
        if let Some(name) = part.strip_prefix(COLON) {
            match name.strip_suffix('?') {
                Some(name) => Self::OptionalParam(name.into()),
                None => Self::Param(name.into()),
            }
        } else if part.len() == 1 && part.starts_with(STAR) {
            Self::Wildcard
        } else {
            Self::Static(part.into())
        }
    }
}

impl RegexPattern {
    fn compile(raw: &str) -> Result<Self, RouterError> {
        let regex = RegexBuilder::new(clean_regex(raw))
            .case_insensitive(true)
            .build()
            .map_err(|source| {
                warn!(pattern = raw, error = %source, "invalid regex route pattern");
                RouterError::InvalidPattern {
                    pattern: raw.to_owned(),
                    source,
                }
            })?;

        let groups = regex
            .capture_names()
            .enumerate()
            .skip(1)
            .map(|(i, name)| (Arc::from(i.to_string()), name.map(Arc::from)))
            .collect();

        Ok(Self { regex, groups })
    }
}
