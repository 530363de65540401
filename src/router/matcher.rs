use super::params::Params;
use super::pattern::{PathPattern, RegexPattern, Repr, RoutePattern, Segment};

use crate::path::{calc_offset, split_segments, Parts, SLASH};

impl RoutePattern {
    /// Matches `uri` against this pattern, ignoring the method.
    pub fn matches<'p>(&self, uri: &'p str) -> Option<Params<'p>> {
        match self.repr {
            Repr::Path(ref p) => p.find(self.raw(), uri),
            Repr::Regex(ref r) => r.find(uri),
        }
    }
}

impl RegexPattern {
    fn find<'p>(&self, uri: &'p str) -> Option<Params<'p>> {
        let caps = self.regex.captures(uri)?;
        let mut params = Params::new();
        for (i, &(ref index, ref name)) in self.groups.iter().enumerate() {
            // unmatched optional groups bind nothing
            if let Some(m) = caps.get(i + 1) {
                params.bind(index, m.as_str());
                if let Some(name) = name {
                    params.bind(name, m.as_str());
                }
            }
        }
        Some(params)
    }
}

impl PathPattern {
    fn find<'p>(&self, raw: &str, uri: &'p str) -> Option<Params<'p>> {
        if !self.wildcard_tail && raw == uri {
            return Some(Params::new());
        }

        if !self.wildcard_tail && !self.slash_consistent(uri) {
            return None;
        }

        let mut parts = split_segments(uri);
        let segments = &self.segments;

        if segments.len() == parts.len() {
            return self.walk(uri, &parts);
        }

        if self.wildcard_tail {
            // "/files/*" must accept "/files/"
            if parts.len() + 1 == segments.len() && uri.ends_with(SLASH) {
                parts.push("");
                parts.push("");
            }
            if segments.len() < parts.len() {
                return self.walk(uri, &parts);
            }
        }

        if segments.len() > parts.len() {
            return self.find_optional_tail(&parts);
        }

        None
    }

    /// Exactly one of pattern and uri ending with `/` is a mismatch,
    /// unless the pattern ends with the optional-slash marker.
    fn slash_consistent(&self, uri: &str) -> bool {
        if uri.ends_with(SLASH) {
            self.slash_tail || self.optional_slash
        } else {
            !self.slash_tail
        }
    }

    /// Walks every pattern segment against the same position of `parts`.
    /// `parts` holds at least as many segments as the pattern.
    fn walk<'p>(&self, uri: &'p str, parts: &Parts<'p>) -> Option<Params<'p>> {
        let mut params = Params::new();
        let last = self.segments.len().saturating_sub(1);

        for (i, (seg, &part)) in self.segments.iter().zip(parts.iter()).enumerate() {
            match seg {
                Segment::Wildcard if self.wildcard_tail && i == last => {
                    params.splat.push(remainder(uri, part));
                    return Some(params);
                }
                Segment::Wildcard => params.splat.push(part),
                Segment::Param(name) | Segment::OptionalParam(name) => params.bind(name, part),
                Segment::Static(text) => {
                    if **text != *part {
                        return None;
                    }
                }
            }
        }

        Some(params)
    }

    /// The uri is a static prefix of the pattern and every segment past it
    /// is an optional parameter.
    fn find_optional_tail<'p>(&self, parts: &Parts<'p>) -> Option<Params<'p>> {
        let (prefix, rest) = self.segments.split_at(parts.len());

        for (seg, &part) in prefix.iter().zip(parts.iter()).rev() {
            match seg {
                Segment::Static(text) if **text == *part => {}
                _ => return None,
            }
        }

        if rest.iter().all(|s| matches!(s, Segment::OptionalParam(_))) {
            Some(Params::new())
        } else {
            None
        }
    }
}

/// The uri suffix starting at `part`, without trailing slashes.
fn remainder<'p>(uri: &'p str, part: &'p str) -> &'p str {
    if part.is_empty() {
        // synthesized for a uri ending right before the wildcard
        return part;
    }
    let offset = calc_offset(uri, part);
    uri[offset..].trim_end_matches(SLASH)
}
