//! HTTP response types and utilities.

/// HTTP status codes produced by this server, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
    MethodNotAllowed = 405,
    ServiceUnavailable = 503,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

/// Represents an HTTP response.
///
/// Every response this server writes carries the same fixed header set:
/// `Content-Type`, `Content-Length`, and `Connection: close`. The connection
/// is closed after the body, so `Content-Length` is always the exact byte
/// length of the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The Content-Type header value
    pub content_type: String,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    ///
    /// The content type starts as `text/html; charset=UTF-8`, which is what
    /// every generated error page uses; file responses override it.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: String::from("text/html; charset=UTF-8"),
            body: Vec::new(),
        }
    }

    /// Create the standard error page for a status code, e.g.
    /// `<h1>404 Not Found</h1>`.
    pub fn error_page(status: StatusCode) -> Self {
        let body = format!("<h1>{} {}</h1>", status as u16, status.reason_phrase());
        Self::new(status).with_body_bytes(body.into_bytes())
    }

    /// Set the response body.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.body.len() + 128);

        // Add the status line
        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status as u16,
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the fixed header set
        let headers = format!(
            "Content-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.content_type,
            self.body.len()
        );
        bytes.extend_from_slice(headers.as_bytes());

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
