use crate::{
    component::{Authority, Host, HostData, Path, Query, QueryValue, Scheme, UserInfo},
    error::{DecodeError, DecodeErrorKind, Error},
    pct_enc::Encode,
    Uri,
};
use core::{fmt, net::IpAddr};

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            DecodeErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            DecodeErrorKind::InvalidUtf8 => "invalid UTF-8 sequence at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => f.write_str("container holds no value"),
            Error::InvalidContainer => f.write_str("container holds more than one value"),
            Error::MalformedHostname => {
                f.write_str("address literal is missing its closing bracket")
            }
            Error::InvalidIpAddr => f.write_str("invalid IP address"),
            Error::InvalidPort(e) => write!(f, "invalid port: {e}"),
            Error::MissingScheme => f.write_str("missing scheme"),
            Error::Decode(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            Some(HostData::Addr(IpAddr::V6(addr))) => write!(f, "[{addr}]"),
            Some(HostData::Addr(IpAddr::V4(addr))) => write!(f, "{addr}"),
            Some(HostData::Name(name)) => f.write_str(name),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").field("data", &self.data()).finish()
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Encode(self.username()))?;
        if let Some(password) = self.password() {
            write!(f, ":{}", Encode(password))?;
        }
        Ok(())
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("username", &self.username())
            .field("password", &self.password())
            .finish()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("//")?;
        if let Some(userinfo) = self.userinfo() {
            write!(f, "{userinfo}@")?;
        }
        write!(f, "{}", self.host())?;
        if let Some(port) = self.port() {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", self.host())
            .field("port", &self.port())
            .finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("/");
        }
        for seg in self {
            write!(f, "/{}", Encode(seg))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl fmt::Debug for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = self.delimiter() as char;
        let mut sep = '?';

        for (key, values) in self {
            if values.is_empty() {
                write!(f, "{sep}{}", Encode(key))?;
                sep = delimiter;
            }
            for value in values {
                write!(f, "{sep}{}={}", Encode(key), Encode(value))?;
                sep = delimiter;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a>(&'a Query);

        impl fmt::Debug for Entries<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0).finish()
            }
        }

        f.debug_struct("Query")
            .field("entries", &Entries(self))
            .field("delimiter", &(self.delimiter() as char))
            .finish()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme())?;
        if let Some(authority) = self.authority() {
            write!(f, "{authority}")?;
        }
        write!(f, "{}", self.path())?;
        if let Some(query) = self.query() {
            write!(f, "{query}")?;
        }
        if let Some(fragment) = self.fragment() {
            write!(f, "#{}", Encode(fragment))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("path", self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
