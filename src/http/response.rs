use crate::http::encoding::{self, ContentEncoding};
use crate::http::request::Request;

pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A response ready to be serialized.
///
/// Headers are kept in emission order; the writer does not reorder them.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 200 OK carrying `body`, encoded and annotated per `opts`.
    ///
    /// An empty `content_type` omits the `Content-Type` header.
    pub fn ok(
        opts: &ResponseOptions,
        body: impl Into<Vec<u8>>,
        content_type: &str,
    ) -> std::io::Result<Self> {
        ResponseBuilder::new(StatusCode::Ok)
            .encoding(opts.encoding)
            .content_type(content_type)
            .close(opts.close)
            .body(body.into())
            .build()
    }

    /// 404 with no body; only `Connection: close` may follow the status line.
    pub fn not_found(opts: &ResponseOptions) -> Self {
        Response {
            status: StatusCode::NotFound,
            headers: close_header(opts.close),
            body: Vec::new(),
        }
    }

    /// Bare 201: status line and blank separator, nothing else.
    pub fn created() -> Self {
        Response {
            status: StatusCode::Created,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// What the originating request asks of its response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseOptions {
    /// Negotiated body encoding, if any.
    pub encoding: Option<ContentEncoding>,
    /// Request carried `Connection: close`.
    pub close: bool,
}

impl ResponseOptions {
    pub fn for_request(req: &Request, supported: &[ContentEncoding]) -> Self {
        Self {
            encoding: encoding::negotiate(req.accept_encoding(), supported),
            close: !req.keep_alive(),
        }
    }
}

/// Builder that applies the fixed header layout:
/// `Content-Encoding`, `Content-Type`, `Content-Length`, `Connection`.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .encoding(Some(ContentEncoding::Gzip))
///     .body(b"hello".to_vec())
///     .build()?;
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    encoding: Option<ContentEncoding>,
    close: bool,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: String::new(),
            encoding: None,
            close: false,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn encoding(mut self, encoding: Option<ContentEncoding>) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Encodes the body (if an encoding was chosen) and lays out the headers.
    ///
    /// `Content-Length` reflects the emitted bytes and is omitted when they
    /// are empty.
    pub fn build(self) -> std::io::Result<Response> {
        let mut headers = Vec::new();
        let mut body = self.body;

        if let Some(enc) = self.encoding {
            headers.push(("Content-Encoding".to_string(), enc.as_str().to_string()));
            let plain_len = body.len();
            body = enc.encode(&body)?;
            tracing::debug!(
                encoding = enc.as_str(),
                plain = plain_len,
                encoded = body.len(),
                "Encoded response body"
            );
        }

        if !self.content_type.is_empty() {
            headers.push(("Content-Type".to_string(), self.content_type));
        }

        if !body.is_empty() {
            headers.push(("Content-Length".to_string(), body.len().to_string()));
        }

        headers.extend(close_header(self.close));

        Ok(Response {
            status: self.status,
            headers,
            body,
        })
    }
}

fn close_header(close: bool) -> Vec<(String, String)> {
    if close {
        vec![("Connection".to_string(), "close".to_string())]
    } else {
        Vec::new()
    }
}
