//! Error types.

use core::num::ParseIntError;

/// Detailed cause of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Percent-encoded octets that do not form a valid UTF-8 sequence.
    ///
    /// This covers invalid lead bytes, missing continuation octets
    /// and sequences rejected by the UTF-8 decoder.
    ///
    /// The error index points to the percent character "%" starting the sequence.
    InvalidUtf8,
}

/// An error occurred when percent-decoding a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub(crate) index: usize,
    pub(crate) kind: DecodeErrorKind,
}

impl DecodeError {
    /// Returns the index at which the error occurred in the input string.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for DecodeError {}

/// An error occurred when parsing or converting a URI component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A conversion required a populated field but none is populated.
    ///
    /// Raised by [`Host`] with neither a name nor an address,
    /// and by [`QueryValue`] with no values.
    ///
    /// [`Host`]: crate::component::Host
    /// [`QueryValue`]: crate::component::QueryValue
    EmptyContainer,
    /// A [`QueryValue`] holding more than one value was converted to a single string.
    ///
    /// [`QueryValue`]: crate::component::QueryValue
    InvalidContainer,
    /// An address literal begins with `[` but does not end with `]`.
    MalformedHostname,
    /// An address candidate is not a valid IPv4 or IPv6 address.
    InvalidIpAddr,
    /// A port is not a decimal integer in `0..=65535`.
    InvalidPort(ParseIntError),
    /// A URI has no `:` terminating its scheme.
    MissingScheme,
    /// A component contains an invalid percent-encoded sequence.
    Decode(DecodeError),
}

impl From<DecodeError> for Error {
    #[inline]
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<ParseIntError> for Error {
    #[inline]
    fn from(e: ParseIntError) -> Self {
        Error::InvalidPort(e)
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for Error {
    fn source(&self) -> Option<&(dyn crate::Error + 'static)> {
        match self {
            Error::InvalidPort(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

pub(crate) type Result<T, E = Error> = core::result::Result<T, E>;
