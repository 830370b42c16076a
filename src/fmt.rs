use crate::{BuildError, BuildErrorKind, UrlBuilder};
use std::fmt;

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            BuildErrorKind::InvalidScheme => "scheme is not a well-known scheme",
            BuildErrorKind::InvalidHost => "host is empty or contains no dot",
            BuildErrorKind::InvalidPort => "port is not a four-digit number",
            BuildErrorKind::MissingHost => "cannot build a URL without a host",
        };
        f.write_str(msg)
    }
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("scheme", &self.state.scheme)
            .field("host", &self.state.host)
            .field("port", &self.state.port)
            .field("paths", &self.state.paths)
            .field("queries", &self.state.queries)
            .finish()
    }
}
