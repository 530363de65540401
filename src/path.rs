use smallvec::SmallVec;

pub(crate) const SLASH: char = '/';
pub(crate) const STAR: char = '*';
pub(crate) const COLON: char = ':';

pub(crate) const REGEX_PREFIX: &str = "~/";
pub(crate) const OPTIONAL_SLASH: &str = "?";

/// Reserved pattern of filters that apply to every path.
pub const ALL_PATHS: &str = "+/*paths";

/// Accept type of entries registered without one.
pub const DEFAULT_ACCEPT_TYPE: &str = "*/*";

pub(crate) type Parts<'a> = SmallVec<[&'a str; 8]>;

/// Splits a path on `/`, dropping empty segments.
pub(crate) fn split_segments(path: &str) -> Parts<'_> {
    path.split(SLASH).filter(|s| !s.is_empty()).collect()
}

/// Strips the `~/` marker and one trailing `/` from a regex pattern.
pub(crate) fn clean_regex(pattern: &str) -> &str {
    let body = pattern.strip_prefix(REGEX_PREFIX).unwrap_or(pattern);
    body.strip_suffix(SLASH).unwrap_or(body)
}

#[inline(always)]
pub(crate) fn calc_offset(src: &str, dst: &str) -> usize {
    let p2 = dst.as_ptr() as usize;
    let p1 = src.as_ptr() as usize;
    p2 - p1
}
