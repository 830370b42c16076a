#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A small URL construction and parsing library.
//!
//! A [`ParsedUrl`] decomposes a URL string into scheme, host, port, path
//! segments, and query parameters with a greedy left-to-right zone scanner.
//! A [`UrlBuilder`] holds those five fields as mutable state and exposes a
//! fluent API to transform them and serialize the result.
//!
//! ```
//! use urlkit::UrlBuilder;
//!
//! let url = UrlBuilder::from_url("http://example.com/docs?lang=en")
//!     .scheme("https")?
//!     .port(8080)?
//!     .append(["api", "v2"])
//!     .add([("page", "1")])
//!     .over([("lang", "fr")])
//!     .build_as_string()?;
//!
//! assert_eq!(url, "https://example.com:8080/docs/api/v2?lang=fr&page=1");
//! # Ok::<_, urlkit::BuildError>(())
//! ```
//!
//! The scanner is deliberately not a general URI grammar: it consumes five
//! fixed zones in order and never backtracks, so it accepts any input and
//! performs no percent-decoding. See [`ParsedUrl::parse`] for the exact
//! rules.
//!
//! # Feature flags
//!
//! - `serde`: Enables `Serialize` and `Deserialize` implementations for
//!   [`ParsedUrl`].

mod builder;
mod error;
mod fmt;
mod parser;

pub use builder::UrlBuilder;
pub use error::{BuildError, BuildErrorKind};
pub use parser::ParsedUrl;
