use crate::{error::Result, pct_enc};
use alloc::string::String;

/// A [userinfo] subcomponent: a user name with an optional password.
///
/// Both parts are stored decoded.
///
/// [userinfo]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.2.2
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfo {
    username: String,
    password: Option<String>,
}

impl UserInfo {
    /// Creates a userinfo with the given user name and no password.
    #[must_use]
    pub fn new(username: impl Into<String>) -> UserInfo {
        UserInfo {
            username: username.into(),
            password: None,
        }
    }

    /// Parses a userinfo from a string slice.
    ///
    /// The input is split at the first `:`, and both parts are percent-decoded.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either part fails to [decode](pct_enc::decode).
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_uri::component::UserInfo;
    ///
    /// let info = UserInfo::parse("us%20er:p:w")?;
    /// assert_eq!(info.username(), "us er");
    /// assert_eq!(info.password(), Some("p:w"));
    ///
    /// let info = UserInfo::parse("anonymous")?;
    /// assert_eq!(info.password(), None);
    /// # Ok::<_, canon_uri::error::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<UserInfo> {
        let (username, password) = match s.split_once(':') {
            Some((username, password)) => (username, Some(password)),
            None => (s, None),
        };
        Ok(UserInfo {
            username: pct_enc::decode(username)?,
            password: password.map(pct_enc::decode).transpose()?,
        })
    }

    /// Returns the decoded user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the decoded password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Sets the user name.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Sets or removes the password.
    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }
}
