use crate::{
    error::{Error, Result},
    ip,
    pct_enc::table,
};
use alloc::string::{String, ToString};
use core::net::IpAddr;

/// The data held by a populated [`Host`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostData {
    /// A host name, stored as written.
    ///
    /// Note that ASCII characters within a host name are *case-insensitive*.
    Name(String),
    /// An IPv4 or IPv6 address.
    Addr(IpAddr),
}

/// A [host] subcomponent, holding either a host name or an IP address.
///
/// A host obtained by parsing is always populated. A host created with
/// [`Host::default`] is empty, and conversions that need its data fail
/// with [`Error::EmptyContainer`].
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.2.2
///
/// # Examples
///
/// ```
/// use canon_uri::component::Host;
///
/// let host = Host::parse("192.168.1.1")?;
/// assert!(host.is_addr());
///
/// let host = Host::parse("example.com")?;
/// assert!(host.is_name());
/// assert_eq!(host.name(), Some("example.com"));
///
/// let host = Host::parse("[::1]")?;
/// assert_eq!(host.to_string(), "[::1]");
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Host {
    data: Option<HostData>,
}

impl Host {
    /// Parses a host from a string slice.
    ///
    /// An input containing `:` is an address literal and is parsed as an
    /// IPv6 address, with the enclosing square brackets stripped if present.
    ///
    /// Otherwise the input is parsed as an IPv4 address if it consists only
    /// of digits and exactly three dots, and is taken as a host name if not.
    /// No further check is made on host names.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the following is true.
    ///
    /// - The input starts with `[` but does not end with `]`.
    /// - The input is an address candidate but not a valid address.
    pub fn parse(s: &str) -> Result<Host> {
        let data = if s.contains(':') {
            let addr = match s.strip_prefix('[') {
                Some(rem) => rem.strip_suffix(']').ok_or(Error::MalformedHostname)?,
                None => s,
            };
            HostData::Addr(ip::parse(addr).ok_or(Error::InvalidIpAddr)?)
        } else if looks_like_ipv4(s) {
            HostData::Addr(ip::parse(s).ok_or(Error::InvalidIpAddr)?)
        } else {
            HostData::Name(s.into())
        };
        Ok(Host { data: Some(data) })
    }

    /// Creates a host holding the given host name.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Host {
        Host {
            data: Some(HostData::Name(name.into())),
        }
    }

    /// Creates a host holding the given address.
    #[must_use]
    pub fn from_addr(addr: impl Into<IpAddr>) -> Host {
        Host {
            data: Some(HostData::Addr(addr.into())),
        }
    }

    /// Returns the held data, or `None` if the host is empty.
    #[must_use]
    pub fn data(&self) -> Option<&HostData> {
        self.data.as_ref()
    }

    /// Checks whether the host holds a host name.
    #[must_use]
    pub fn is_name(&self) -> bool {
        matches!(self.data, Some(HostData::Name(_)))
    }

    /// Checks whether the host holds an address.
    #[must_use]
    pub fn is_addr(&self) -> bool {
        matches!(self.data, Some(HostData::Addr(_)))
    }

    /// Checks whether the host is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Returns the host name, if the host holds one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            Some(HostData::Name(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns the held address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the host holds no address.
    pub fn to_addr(&self) -> Result<IpAddr> {
        match self.data {
            Some(HostData::Addr(addr)) => Ok(addr),
            _ => Err(Error::EmptyContainer),
        }
    }

    /// Renders the host to a string.
    ///
    /// IPv6 addresses are enclosed in square brackets.
    /// This is the checked counterpart of the `Display` implementation,
    /// which writes nothing for an empty host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the host is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_uri::{component::Host, error::Error};
    ///
    /// assert_eq!(Host::default().try_to_string(), Err(Error::EmptyContainer));
    /// assert_eq!(Host::parse("::1")?.try_to_string()?, "[::1]");
    /// # Ok::<_, canon_uri::error::Error>(())
    /// ```
    pub fn try_to_string(&self) -> Result<String> {
        match self.data {
            Some(_) => Ok(self.to_string()),
            None => Err(Error::EmptyContainer),
        }
    }
}

// Not an IPv4 grammar check: a name made only of digits and three dots
// is taken for an address.
fn looks_like_ipv4(s: &str) -> bool {
    s.bytes().filter(|&x| x == b'.').count() == 3 && table::IPV4.validate(s.as_bytes())
}

impl From<IpAddr> for Host {
    #[inline]
    fn from(addr: IpAddr) -> Self {
        Host::from_addr(addr)
    }
}
