//! URI components.

mod authority;
mod host;
mod path;
mod query;
mod userinfo;

pub use authority::Authority;
pub use host::{Host, HostData};
pub use path::{Path, Segments};
pub use query::{Iter, Query, QueryValue, Values};
pub use userinfo::UserInfo;

use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. Compare the results of
/// [`as_str`](Self::as_str) for a case-sensitive comparison.
///
/// # Examples
///
/// ```
/// use canon_uri::{component::Scheme, Uri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new("http");
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/")?;
///
/// // Case-insensitive comparison.
/// assert_eq!(uri.scheme(), SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(uri.scheme().as_str(), "HTTP");
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    /// Converts a string slice to `&Scheme`.
    ///
    /// No validation against the scheme grammar is performed.
    #[ref_cast_custom]
    pub const fn new(s: &str) -> &Scheme;

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl PartialEq<str> for Scheme {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }
}

impl Eq for Scheme {}
