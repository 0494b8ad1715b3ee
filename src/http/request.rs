use std::collections::HashMap;

use bytes::Bytes;

/// HTTP request methods.
///
/// Only GET and POST are routed anywhere; every other token still parses
/// and falls through to 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, kept verbatim (`TRACE`, `PROPFIND`, ...)
    Other(String),
}

/// A parsed HTTP request.
///
/// Header names are stored lowercased, so lookups through [`Request::header`]
/// are case-insensitive; values are kept exactly as sent. The body holds
/// exactly the bytes that followed the blank line, up to `Content-Length`.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, e.g. `/echo/hello`. Empty when the request
    /// line carried only a method and a version.
    pub path: String,
    /// Protocol token, typically `HTTP/1.1`
    pub version: String,
    /// Lowercased header name to raw value; a repeated name keeps the last value
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, and unrecognized tokens become
    /// [`Method::Other`]. Returns `None` only for an empty token or one
    /// containing whitespace or control characters.
    ///
    /// ```
    /// # use tinyhttpd::http::request::Method;
    /// assert_eq!(Method::from_str("POST"), Some(Method::POST));
    /// assert_eq!(Method::from_str("post"), Some(Method::Other("post".into())));
    /// assert_eq!(Method::from_str(""), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            "" => None,
            other if other.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control()) => {
                None
            }
            other => Some(Method::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header, normalizing the name the same way the parser does.
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.as_ref().trim().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Parses `Content-Length`, returning 0 if it is missing or not a number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }

    pub fn accept_encoding(&self) -> Option<&str> {
        self.header("Accept-Encoding")
    }

    /// True unless the client sent `Connection: close`.
    ///
    /// Any other value, including none at all, keeps the connection open.
    pub fn keep_alive(&self) -> bool {
        self.header("Connection") != Some("close")
    }

    /// The body cut down to the declared `Content-Length`.
    pub fn declared_body(&self) -> Bytes {
        let len = self.content_length().min(self.body.len());
        self.body.slice(..len)
    }
}
