use tinyhttpd::http::path::PathSegments;

fn split(target: &str) -> (&str, &str) {
    let s = PathSegments::parse(target);
    (s.primary, s.secondary)
}

#[test]
fn test_root_and_empty_target() {
    assert_eq!(split("/"), ("", ""));
    assert_eq!(split(""), ("", ""));
}

#[test]
fn test_primary_only() {
    assert_eq!(split("/user-agent"), ("user-agent", ""));
}

#[test]
fn test_primary_and_secondary() {
    assert_eq!(split("/echo/hello"), ("echo", "hello"));
}

#[test]
fn test_secondary_keeps_nested_segments() {
    assert_eq!(split("/files/a/b/c.txt"), ("files", "a/b/c.txt"));
    assert_eq!(split("/echo/a//b"), ("echo", "a//b"));
}

#[test]
fn test_trailing_slash_gives_empty_secondary() {
    assert_eq!(split("/echo/"), ("echo", ""));
}
