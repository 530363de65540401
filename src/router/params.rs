use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use smallvec::SmallVec;

/// Values bound by one successful match, borrowed from the request uri.
///
/// Names are the parameter names of the pattern, or the 1-based index of a
/// regex capture group. Wildcards never bind a name; the text they covered
/// is kept in [`Params::splat`].
#[derive(Debug, Clone, Default)]
pub struct Params<'p> {
    pub(super) buf: SmallVec<[(Arc<str>, &'p str); 8]>,
    pub(super) splat: SmallVec<[&'p str; 2]>,
}

impl<'p> Params<'p> {
    /// Looks up a binding by name. A leading `:` is ignored and names are
    /// compared ASCII-case-insensitively, so `get(":ID")` finds `:id`.
    pub fn get(&self, name: &str) -> Option<&'p str> {
        let name = name.strip_prefix(':').unwrap_or(name);
        self.buf.iter().find_map(|&(ref k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Positional regex group, 1-based.
    pub fn at(&self, index: usize) -> Option<&'p str> {
        self.get(&index.to_string())
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn splat(&self) -> &[&'p str] {
        &self.splat
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'p str)> + '_ {
        self.buf.iter().map(|&(ref k, v)| (&**k, v))
    }
}

impl<'p> Deref for Params<'p> {
    type Target = [(Arc<str>, &'p str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'p> Params<'p> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
            splat: SmallVec::new(),
        }
    }

    #[inline]
    pub(super) fn bind(&mut self, name: &Arc<str>, value: &'p str) {
        self.buf.push((Arc::clone(name), value))
    }
}
