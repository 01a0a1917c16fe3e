use super::{Host, UserInfo};
use crate::error::{Error, Result};

/// An [authority] component.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.2
///
/// # Examples
///
/// ```
/// use canon_uri::component::Authority;
///
/// let auth = Authority::parse("//user:pass@example.com:8080")?;
/// let info = auth.userinfo().unwrap();
/// assert_eq!(info.username(), "user");
/// assert_eq!(info.password(), Some("pass"));
/// assert_eq!(auth.host().name(), Some("example.com"));
/// assert_eq!(auth.port(), Some(8080));
///
/// assert_eq!(auth.to_string(), "//user:pass@example.com:8080");
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Authority {
    userinfo: Option<UserInfo>,
    host: Host,
    port: Option<u16>,
}

impl Authority {
    /// Creates an authority with the given host, no userinfo and no port.
    #[must_use]
    pub fn new(host: Host) -> Authority {
        Authority {
            userinfo: None,
            host,
            port: None,
        }
    }

    /// Parses an authority from a string slice.
    ///
    /// A leading `//` is skipped. Anything before the first `@` is the
    /// [userinfo](UserInfo::parse). In the rest, a `:` introduces the port
    /// unless it lies within a bracketed address literal.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the userinfo or the host fails to parse,
    /// or if the port is not a decimal integer in `0..=65535` made of digits
    /// only. A sign, as in `example.com:+80`, is rejected.
    ///
    /// ```
    /// use canon_uri::{component::Authority, error::Error};
    ///
    /// let auth = Authority::parse("[::1]:443")?;
    /// assert!(auth.host().is_addr());
    /// assert_eq!(auth.port(), Some(443));
    ///
    /// assert!(matches!(Authority::parse("example.com:65536"), Err(Error::InvalidPort(_))));
    /// # Ok::<_, canon_uri::error::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<Authority> {
        let s = s.strip_prefix("//").unwrap_or(s);

        let (userinfo, rem) = match s.split_once('@') {
            Some((userinfo, rem)) => (Some(UserInfo::parse(userinfo)?), rem),
            None => (None, s),
        };

        // The port colon of an address literal follows its closing bracket.
        let colon_i = if rem.starts_with('[') {
            let bracket_i = rem.find(']').ok_or(Error::MalformedHostname)?;
            rem[bracket_i..].find(':').map(|j| bracket_i + j)
        } else {
            rem.find(':')
        };

        let (host, port) = match colon_i {
            Some(i) => (&rem[..i], Some(parse_port(&rem[i + 1..])?)),
            None => (rem, None),
        };

        Ok(Authority {
            userinfo,
            host: Host::parse(host)?,
            port,
        })
    }

    /// Returns the optional userinfo subcomponent.
    #[must_use]
    pub fn userinfo(&self) -> Option<&UserInfo> {
        self.userinfo.as_ref()
    }

    /// Returns the host subcomponent.
    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the optional port subcomponent.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets or removes the userinfo subcomponent.
    pub fn set_userinfo(&mut self, userinfo: Option<UserInfo>) {
        self.userinfo = userinfo;
    }

    /// Sets the host subcomponent.
    pub fn set_host(&mut self, host: Host) {
        self.host = host;
    }

    /// Sets or removes the port subcomponent.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }
}

fn parse_port(s: &str) -> Result<u16> {
    // `u16::from_str` takes a leading `+`. The sign on its own fails
    // with `InvalidDigit`, which is the error a port wants here.
    let digits = if s.starts_with('+') { &s[..1] } else { s };
    Ok(digits.parse::<u16>()?)
}
