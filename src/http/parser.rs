use std::collections::HashMap;

use bytes::Bytes;

use crate::http::request::{Method, Request};

const HEADERS_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    /// Buffered bytes exceeded the configured request size limit.
    TooLarge,
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied, so any trailing
/// bytes (a pipelined request) can be kept for the next call. The request
/// line may be `METHOD TARGET VERSION` or `METHOD VERSION`, the latter
/// yielding an empty target.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf, 0).ok_or(ParseError::Incomplete)?;
    parse_with_headers_end(buf, headers_end)
}

/// Offset of the `CRLF CRLF` terminator, searching from `from` onwards.
///
/// Callers that accumulate reads can pass the previous buffer length minus
/// three so a terminator split across reads is still found.
pub fn find_headers_end(buf: &[u8], from: usize) -> Option<usize> {
    let from = from.min(buf.len());
    buf[from..]
        .windows(HEADERS_TERMINATOR.len())
        .position(|w| w == HEADERS_TERMINATOR)
        .map(|pos| from + pos)
}

/// Like [`parse_http_request`], with the terminator offset already known.
pub fn parse_with_headers_end(
    buf: &[u8],
    headers_end: usize,
) -> Result<(Request, usize), ParseError> {
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + HEADERS_TERMINATOR.len()..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let parts: Vec<&str> = request_line.split(' ').collect();

    let (method_str, path, version) = match parts.as_slice() {
        [method, path, version] => (*method, *path, *version),
        [method, version] => (*method, "", *version),
        _ => return Err(ParseError::InvalidRequest),
    };

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = split_header(line).ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_ascii_lowercase(), value.to_string());
    }

    // Body; an unreadable Content-Length counts as no body
    let content_length = headers
        .get("content-length")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = Bytes::copy_from_slice(&body_bytes[..content_length]);

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + HEADERS_TERMINATOR.len() + content_length;
    Ok((request, total_consumed))
}

/// Splits at the first `": "`, falling back to a bare `:` for `Name:value`.
fn split_header(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ").or_else(|| line.split_once(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn leaves_pipelined_bytes_unconsumed() {
        let first = b"GET /a HTTP/1.1\r\n\r\n";
        let mut buf = first.to_vec();
        buf.extend_from_slice(b"GET /b HTTP/1.1\r\n\r\n");

        let (parsed, consumed) = parse_http_request(&buf).unwrap();

        assert_eq!(parsed.path, "/a");
        assert_eq!(consumed, first.len());
    }

    #[test]
    fn finds_terminator_when_resuming_mid_sequence() {
        let buf = b"GET / HTTP/1.1\r\n\r\n";
        let end = buf.len() - 4;

        assert_eq!(find_headers_end(buf, 0), Some(end));
        assert_eq!(find_headers_end(buf, end), Some(end));
        assert_eq!(find_headers_end(buf, end + 1), None);
        assert_eq!(find_headers_end(buf, 100), None);
    }
}
