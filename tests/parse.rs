use urlkit::ParsedUrl;

fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

#[test]
fn parse_full_url() {
    let u = ParsedUrl::parse("http://google.com:4432/first-segment/last-segment?q=first&w=second");
    assert_eq!(u.scheme, "http");
    assert_eq!(u.host, "google.com");
    assert_eq!(u.port, "4432");
    assert_eq!(u.paths, ["first-segment", "last-segment"]);
    assert_eq!(u.queries, q(&[("q", "first"), ("w", "second")]));
}

#[test]
fn parse_without_port() {
    let u = ParsedUrl::parse("https://example.com/a/b");
    assert_eq!(u.scheme, "https");
    assert_eq!(u.host, "example.com");
    assert_eq!(u.port, "");
    assert_eq!(u.paths, ["a", "b"]);
    assert!(u.queries.is_empty());
}

#[test]
fn parse_host_only() {
    let u = ParsedUrl::parse("https://example.com");
    assert_eq!(u.scheme, "https");
    assert_eq!(u.host, "example.com");
    assert_eq!(u.port, "");
    assert!(u.paths.is_empty());
    assert!(u.queries.is_empty());
}

#[test]
fn parse_empty_input() {
    assert_eq!(ParsedUrl::parse(""), ParsedUrl::default());
}

#[test]
fn parse_scheme_only() {
    let u = ParsedUrl::parse("https://");
    assert_eq!(u.scheme, "https");
    assert_eq!(u.host, "");
    assert_eq!(u.port, "");
    assert!(u.paths.is_empty());
    assert!(u.queries.is_empty());
}

// The scanner never backtracks: a schemeless input loses its host to the
// scheme zone. Pinned on purpose.
#[test]
fn parse_schemeless_takes_host_as_scheme() {
    let u = ParsedUrl::parse("google.com:4432/path");
    assert_eq!(u.scheme, "google.com");
    assert_eq!(u.host, "4432");
    assert_eq!(u.port, "");
    assert_eq!(u.paths, ["path"]);
}

#[test]
fn parse_single_colon_separator() {
    let u = ParsedUrl::parse("mailto:user@example.com");
    assert_eq!(u.scheme, "mailto");
    assert_eq!(u.host, "user@example.com");
    assert_eq!(u.port, "");
}

#[test]
fn parse_drops_empty_path_segments() {
    let u = ParsedUrl::parse("http://example.com//a///b/");
    assert_eq!(u.paths, ["a", "b"]);
}

#[test]
fn parse_strips_colons_from_port() {
    let u = ParsedUrl::parse("http://example.com:44:32/x");
    assert_eq!(u.port, "4432");
    assert_eq!(u.paths, ["x"]);
}

#[test]
fn parse_query_without_value() {
    let u = ParsedUrl::parse("http://example.com/x?flag&q=1");
    assert_eq!(u.queries, q(&[("flag", ""), ("q", "1")]));
}

#[test]
fn parse_query_with_extra_equals() {
    let u = ParsedUrl::parse("http://example.com/x?q=a=b");
    assert_eq!(u.queries, q(&[("q", "a=b")]));
}

#[test]
fn parse_duplicate_query_keys_last_wins() {
    let u = ParsedUrl::parse("http://example.com/x?q=1&w=2&q=3");
    assert_eq!(u.queries, q(&[("q", "3"), ("w", "2")]));
}

#[test]
fn parse_bare_question_mark() {
    let u = ParsedUrl::parse("http://example.com/x?");
    assert_eq!(u.paths, ["x"]);
    assert!(u.queries.is_empty());
}

#[test]
fn parse_stops_at_fragment() {
    let u = ParsedUrl::parse("http://example.com/a?q=1#section");
    assert_eq!(u.paths, ["a"]);
    assert_eq!(u.queries, q(&[("q", "1")]));
}
