#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URI parser and serializer following [RFC 2396].
//!
//! [RFC 2396]: https://datatracker.ietf.org/doc/html/rfc2396
//!
//! A [`Uri`] is parsed into decoded components: a scheme, an optional
//! [`Authority`] (with optional [`UserInfo`], a [`Host`] and an optional port),
//! a [`Path`] of segments, an optional [`Query`] mapping keys to
//! [`QueryValue`]s, and an optional fragment. Each component can also be
//! parsed on its own or built programmatically.
//!
//! Every component serializes through `Display` to a canonical form,
//! percent-encoding everything but the unreserved characters with
//! [`pct_enc::encode`]. The canonical form is not necessarily identical to
//! the parsed input: see [`Path`] and [`Query`] for what is not preserved.
//!
//! The parser does not validate its input against the grammar, normalize
//! dot-segments, or interpret scheme-specific syntax.
//!
//! [`Authority`]: component::Authority
//! [`UserInfo`]: component::UserInfo
//! [`Host`]: component::Host
//! [`Path`]: component::Path
//! [`Query`]: component::Query
//! [`QueryValue`]: component::QueryValue
//!
//! # Examples
//!
//! ```
//! use canon_uri::Uri;
//!
//! let uri: Uri = "https://example.com//a/b/?q=hello%20world&lang#top".parse()?;
//!
//! let query = uri.query().unwrap();
//! assert_eq!(query.get("q").unwrap().as_single()?, "hello world");
//! assert!(query.get("lang").unwrap().is_empty());
//!
//! // Serialized in canonical form.
//! assert_eq!(uri.to_string(), "https://example.com/a/b?q=hello%20world&lang#top");
//! # Ok::<_, canon_uri::error::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error` (default): Implements [`Error`] for error types, on top of
//!   `core::error::Error` when `std` is disabled.
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for the URI and its
//!   components through their canonical string forms.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

pub mod component;
pub mod error;
pub mod ip;
pub mod pct_enc;

mod convert;
mod fmt;
mod uri;
mod utf8;

pub use uri::Uri;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;
