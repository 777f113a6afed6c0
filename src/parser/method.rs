//! HTTP request methods.

use std::fmt;

/// HTTP request methods as defined in RFC 7231, plus a catch-all for
/// extension tokens.
///
/// Method tokens are matched case-insensitively, so `get` and `GET` are the
/// same method. Unknown tokens are preserved as [`Method::Extension`] rather
/// than rejected: the server answers them with `405 Method Not Allowed`, and
/// a parse failure would drop the connection without a response instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: Requests a representation of the specified resource.
    GET,
    /// POST method: Submits data to be processed to the identified resource.
    POST,
    /// PUT method: Replaces all current representations of the target resource with the request payload.
    PUT,
    /// DELETE method: Deletes the specified resource.
    DELETE,
    /// HEAD method: Same as GET but only transfers the status line and header section.
    HEAD,
    /// OPTIONS method: Describes the communication options for the target resource.
    OPTIONS,
    /// PATCH method: Applies partial modifications to a resource.
    PATCH,
    /// Any other method token, kept verbatim.
    Extension(String),
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Extension(token.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Extension(token) => write!(f, "{token}"),
            _ => write!(f, "{self:?}"),
        }
    }
}
