use crate::{error::Result, pct_enc};
use alloc::{string::String, vec::Vec};
use core::{ops::Index, slice};

/// A [path] component, as a sequence of decoded segments.
///
/// An empty sequence stands for the root path `/`.
///
/// Parsing is lossy: empty segments are dropped, so consecutive slashes
/// collapse, and whether the input had a leading or trailing slash is not
/// kept. The canonical form always starts with `/` and never ends with one
/// unless it is the root path.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.3
///
/// # Examples
///
/// ```
/// use canon_uri::component::Path;
///
/// let path = Path::parse("/a//b%20c/")?;
/// assert!(path.iter().eq(["a", "b c"]));
/// assert_eq!(path.to_string(), "/a/b%20c");
///
/// assert_eq!(Path::new().to_string(), "/");
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates an empty (root) path.
    #[must_use]
    pub const fn new() -> Path {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parses a path from a string slice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a segment fails to [decode](pct_enc::decode).
    pub fn parse(s: &str) -> Result<Path> {
        let s = s.strip_prefix('/').unwrap_or(s);
        let mut path = Path::new();
        for seg in s.split('/').filter(|seg| !seg.is_empty()) {
            path.push(pct_enc::decode(seg)?);
        }
        Ok(path)
    }

    /// Appends a decoded segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Removes the last segment and returns it, or `None` if the path is empty.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Returns the segment at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks whether the path has no segments, i.e., is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Removes all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Returns an iterator over the decoded segments.
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: self.segments.iter(),
        }
    }

    /// Returns the segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }
}

/// An iterator over the segments of a [`Path`].
///
/// This struct is created by [`Path::iter`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Segments<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Segments<'a> {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = alloc::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Path {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.segments.extend(iter.into_iter().map(Into::into));
    }
}

impl Index<usize> for Path {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.segments[index]
    }
}
