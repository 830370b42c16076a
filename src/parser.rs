/// The five fields of a decomposed URL.
///
/// Produced by [`ParsedUrl::parse`]. Fields that are absent from the input
/// are left at their empty defaults; parsing never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedUrl {
    /// Scheme without its `://` separator, or `""`.
    pub scheme: String,
    /// Host name, or `""`.
    pub host: String,
    /// Port digits without the leading `:`, or `""`.
    pub port: String,
    /// Path segments in order, with empty segments dropped.
    pub paths: Vec<String>,
    /// Query parameters as insertion-ordered `(key, value)` pairs.
    /// Keys are unique; on duplicates in the input, the last one wins.
    pub queries: Vec<(String, String)>,
}

impl ParsedUrl {
    /// Decomposes a URL string.
    ///
    /// The input is consumed left to right in five fixed zones, each taking
    /// the longest run its character class allows:
    ///
    /// 1. scheme: `[^:/?#]+`, plus a discarded `[:/]+` separator run when
    ///    the scheme is non-empty;
    /// 2. host: `[^:/?#]+`;
    /// 3. port: `[:0-9]+` with the `:` characters stripped;
    /// 4. paths: `[^?]+`, split on `/`, empty segments dropped;
    /// 5. queries: `[^#]+` with `?` characters stripped, split on `&` and
    ///    then on the first `=` (a pair with no `=` gets value `""`).
    ///
    /// The scanner never backtracks. In particular, a schemeless input such
    /// as `"google.com:4432/path"` reads `"google.com"` as the scheme and
    /// `"4432"` as the host.
    ///
    /// ```
    /// use urlkit::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("http://example.com:4432/a/b?q=1");
    /// assert_eq!(url.scheme, "http");
    /// assert_eq!(url.host, "example.com");
    /// assert_eq!(url.port, "4432");
    /// assert_eq!(url.paths, ["a", "b"]);
    /// assert_eq!(url.queries, vec![("q".to_owned(), "1".to_owned())]);
    /// ```
    pub fn parse(url: &str) -> ParsedUrl {
        let mut parser = Parser {
            state: url,
            pos: 0,
            out: ParsedUrl::default(),
        };
        parser.parse_scheme();
        parser.parse_host();
        parser.parse_port();
        parser.parse_paths();
        parser.parse_queries();
        parser.out
    }
}

/// Inserts a pair, overwriting the value if the key is already present.
fn upsert(queries: &mut Vec<(String, String)>, key: &str, value: &str) {
    match queries.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.into(),
        None => queries.push((key.into(), value.into())),
    }
}

struct Parser<'a> {
    state: &'a str,
    pos: usize,
    out: ParsedUrl,
}

impl<'a> Parser<'a> {
    /// Consumes the longest run of characters satisfying `pred`.
    fn scan(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = &self.state[self.pos..];
        let end = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn parse_scheme(&mut self) {
        let scheme = self.scan(|c| !matches!(c, ':' | '/' | '?' | '#'));
        if !scheme.is_empty() {
            self.out.scheme = scheme.into();
            // Discard the ":" or "://" separator.
            self.scan(|c| matches!(c, ':' | '/'));
        }
    }

    fn parse_host(&mut self) {
        let host = self.scan(|c| !matches!(c, ':' | '/' | '?' | '#'));
        if !host.is_empty() {
            self.out.host = host.into();
        }
    }

    fn parse_port(&mut self) {
        let port = self.scan(|c| c.is_ascii_digit() || c == ':');
        let port = port.replace(':', "");
        if !port.is_empty() {
            self.out.port = port;
        }
    }

    fn parse_paths(&mut self) {
        let paths = self.scan(|c| c != '?');
        self.out.paths = paths
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Into::into)
            .collect();
    }

    fn parse_queries(&mut self) {
        let queries = self.scan(|c| c != '#');
        for pair in queries.replace('?', "").split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            upsert(&mut self.out.queries, key, value);
        }
    }
}
