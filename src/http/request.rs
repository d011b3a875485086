use crate::http::fields::FieldMap;

/// The first line of an HTTP request.
///
/// Method, target, and version are kept as opaque tokens: the server does
/// not validate the method against a fixed set, and the target is the raw
/// request-target string, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (e.g., "GET", "POST")
    pub method: String,
    /// The raw request-target (e.g., "/echo/abc")
    pub target: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Contains the request line, field lines (headers), and any request body.
/// The body holds exactly `Content-Length` octets (empty if the header is
/// absent or not a number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The parsed request line
    pub request_line: RequestLine,
    /// Field lines, ordered, names compared case-insensitively
    pub field_lines: FieldMap,
    /// Request body for POST/PUT requests
    pub body: Vec<u8>,
}

impl Request {
    /// The HTTP method of this request.
    pub fn method(&self) -> &str {
        &self.request_line.method
    }

    /// The raw request-target of this request.
    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    /// Retrieves a field-line value by name (case-insensitive).
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the field value if present, `None` otherwise.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_lines.get(name)
    }

    /// Retrieves the Content-Length field value and parses it as a usize.
    ///
    /// Returns 0 if the field is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.field("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Determines whether the connection should remain open after the response.
    ///
    /// Checks the Connection field. For HTTP/1.1 the default is `true`
    /// (keep-alive); `Connection: close` returns `false`.
    pub fn keep_alive(&self) -> bool {
        self.field("Connection")
            .map(|v| v.eq_ignore_ascii_case("keep-alive"))
            .unwrap_or(true) // HTTP/1.1 default
    }
}
