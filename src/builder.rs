use crate::error::{BuildError, BuildErrorKind};
use crate::parser::ParsedUrl;
use http::Uri;

/// Schemes accepted by [`UrlBuilder::scheme`].
fn is_known_scheme(scheme: &str) -> bool {
    matches!(
        scheme,
        "ftp" | "file" | "http" | "https" | "mailto" | "ws" | "wss"
    )
}

/// A fluent builder for URL strings.
///
/// The builder owns the same five fields as a [`ParsedUrl`] and mutates
/// them in place; every method consumes the builder and returns it for
/// chaining. The collection mutators never fail, while [`scheme`],
/// [`host`], and [`port`] validate their input and fail with a
/// [`BuildError`].
///
/// ```
/// use urlkit::UrlBuilder;
///
/// let url = UrlBuilder::new()
///     .scheme("https")?
///     .host("example.com")?
///     .append(["search"])
///     .add([("q", "cat")])
///     .build_as_string()?;
///
/// assert_eq!(url, "https://example.com/search?q=cat");
/// # Ok::<_, urlkit::BuildError>(())
/// ```
///
/// [`scheme`]: Self::scheme
/// [`host`]: Self::host
/// [`port`]: Self::port
#[must_use]
#[derive(Clone, Default)]
pub struct UrlBuilder {
    pub(crate) state: ParsedUrl,
}

impl UrlBuilder {
    /// Creates a builder with all fields empty.
    pub fn new() -> UrlBuilder {
        UrlBuilder::default()
    }

    /// Creates a builder initialized from a URL string.
    ///
    /// The string goes through [`ParsedUrl::parse`]; an empty string
    /// leaves every field at its default.
    pub fn from_url(url: &str) -> UrlBuilder {
        UrlBuilder {
            state: ParsedUrl::parse(url),
        }
    }

    /// Returns a view of the current builder state.
    pub fn parts(&self) -> &ParsedUrl {
        &self.state
    }

    /// Stringifies each segment and appends it to the path in call order.
    pub fn append<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.state
            .paths
            .extend(segments.into_iter().map(|s| s.to_string()));
        self
    }

    /// Removes the first occurrence of each matching segment from the path.
    ///
    /// Segments that do not occur are ignored.
    pub fn cut<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for segment in segments {
            let segment = segment.to_string();
            if let Some(i) = self.state.paths.iter().position(|s| *s == segment) {
                self.state.paths.remove(i);
            }
        }
        self
    }

    /// Adds each query pair whose key is not already present.
    ///
    /// The first write wins: re-adding an existing key is a no-op.
    pub fn add<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            let key = key.into();
            if !self.state.queries.iter().any(|(k, _)| *k == key) {
                self.state.queries.push((key, value.into()));
            }
        }
        self
    }

    /// Overwrites the value of each query pair whose key is already present.
    ///
    /// Pairs with new keys are ignored.
    pub fn over<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            let key = key.into();
            if let Some((_, v)) = self.state.queries.iter_mut().find(|(k, _)| *k == key) {
                *v = value.into();
            }
        }
        self
    }

    /// Removes each key from the query parameters.
    ///
    /// Absent keys are ignored.
    pub fn del<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.state.queries.retain(|(k, _)| k != key.as_ref());
        }
        self
    }

    /// Sets the scheme.
    ///
    /// Only a fixed set of well-known schemes is accepted: `ftp`, `file`,
    /// `http`, `https`, `mailto`, `ws`, and `wss`.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildErrorKind::InvalidScheme`] error for any other value.
    pub fn scheme(mut self, scheme: &str) -> Result<Self, BuildError> {
        if !is_known_scheme(scheme) {
            return Err(BuildError {
                kind: BuildErrorKind::InvalidScheme,
            });
        }
        self.state.scheme = scheme.into();
        Ok(self)
    }

    /// Sets the host.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildErrorKind::InvalidHost`] error when the value is
    /// empty or contains no `.`.
    pub fn host(mut self, host: &str) -> Result<Self, BuildError> {
        if host.is_empty() || !host.contains('.') {
            return Err(BuildError {
                kind: BuildErrorKind::InvalidHost,
            });
        }
        self.state.host = host.into();
        Ok(self)
    }

    /// Sets the port.
    ///
    /// Only ports whose decimal representation is exactly four digits long
    /// are accepted, i.e. `1000..=9999`. Non-numeric input is ruled out by
    /// the `u16` parameter type.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildErrorKind::InvalidPort`] error outside that range.
    pub fn port(mut self, port: u16) -> Result<Self, BuildError> {
        if !(1000..=9999).contains(&port) {
            return Err(BuildError {
                kind: BuildErrorKind::InvalidPort,
            });
        }
        self.state.port = port.to_string();
        Ok(self)
    }

    /// Serializes the state to a URL string.
    ///
    /// The layout is `scheme://host:port/seg1/seg2?k1=v1&k2=v2`, where each
    /// part is omitted together with its punctuation when the underlying
    /// field is empty. Query pairs are written in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildErrorKind::MissingHost`] error when no host is set.
    pub fn build_as_string(&self) -> Result<String, BuildError> {
        let state = &self.state;
        if state.host.is_empty() {
            return Err(BuildError {
                kind: BuildErrorKind::MissingHost,
            });
        }

        let mut out = String::new();
        if !state.scheme.is_empty() {
            out.push_str(&state.scheme);
            out.push_str("://");
        }
        out.push_str(&state.host);
        if !state.port.is_empty() {
            out.push(':');
            out.push_str(&state.port);
        }
        for segment in &state.paths {
            out.push('/');
            out.push_str(segment);
        }
        for (i, (key, value)) in state.queries.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        Ok(out)
    }

    /// Serializes the state to an [`http::Uri`].
    ///
    /// When no host is set, this recovers by returning the root-path URI
    /// `/` instead of failing.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`http::uri::InvalidUri`] error when the
    /// built string is not a valid URI.
    pub fn build_as_url(&self) -> Result<Uri, http::uri::InvalidUri> {
        match self.build_as_string() {
            Ok(url) => url.parse(),
            Err(_) => Ok(Uri::from_static("/")),
        }
    }
}
