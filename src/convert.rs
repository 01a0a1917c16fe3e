use crate::{
    component::{Authority, Host, Path, Query, UserInfo},
    error::Error,
    Uri,
};
use core::str::FromStr;

#[cfg(feature = "serde")]
use alloc::string::{String, ToString};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_from_str {
    ($($Ty:ident),+ $(,)?) => {
        $(
            impl FromStr for $Ty {
                type Err = Error;

                #[doc = concat!("Equivalent to [`", stringify!($Ty), "::parse`].")]
                #[inline]
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $Ty::parse(s)
                }
            }

            impl TryFrom<&str> for $Ty {
                type Error = Error;

                #[doc = concat!("Equivalent to [`", stringify!($Ty), "::parse`].")]
                #[inline]
                fn try_from(s: &str) -> Result<Self, Self::Error> {
                    $Ty::parse(s)
                }
            }
        )+
    };
}

impl_from_str!(Uri, Authority, Host, UserInfo, Path, Query);

#[cfg(feature = "serde")]
macro_rules! impl_serde_str {
    ($($Ty:ident),+ $(,)?) => {
        $(
            impl Serialize for $Ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(&self.to_string())
                }
            }

            impl<'de> Deserialize<'de> for $Ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    $Ty::parse(&s).map_err(de::Error::custom)
                }
            }
        )+
    };
}

#[cfg(feature = "serde")]
impl_serde_str!(Uri, Authority, Host, UserInfo, Path);

/// A query goes through serde as a pair of its canonical form and its
/// delimiter, since the string alone cannot tell which delimiter splits it.
#[cfg(feature = "serde")]
impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.to_string(), self.delimiter() as char).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (s, delimiter) = <(String, char)>::deserialize(deserializer)?;
        let delimiter = u8::try_from(delimiter)
            .ok()
            .filter(|&x| Query::is_valid_delimiter(x))
            .ok_or_else(|| de::Error::custom(format_args!("invalid query delimiter {delimiter:?}")))?;
        Query::parse_with_delimiter(&s, delimiter).map_err(de::Error::custom)
    }
}
