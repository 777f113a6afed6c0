//! Request line parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// The first line of an HTTP request.
///
/// Only the method and the request target matter to this server; whatever
/// follows the second token (normally the HTTP version) is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, still percent-encoded
    pub target: String,
}

impl RequestLine {
    /// Create a new request line.
    pub fn new(method: Method, target: String) -> Self {
        Self { method, target }
    }
}

/// Parse an HTTP request line from a string.
///
/// The line is split on ASCII whitespace. At least two tokens are required:
/// the method and the request target. Anything after the target is ignored,
/// so both `GET /` and `GET / HTTP/1.1` parse successfully.
///
/// # Arguments
///
/// * `line` - The request line, with or without the trailing CRLF
///
/// # Returns
///
/// The parsed request line, or an error if the line is blank or has fewer
/// than two tokens
pub fn parse_request_line(line: &str) -> Result<RequestLine, Error> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Err(Error::EmptyRequestLine);
    }

    let mut tokens = line.split_whitespace();
    let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
        return Err(Error::MalformedRequestLine(line.to_string()));
    };

    Ok(RequestLine::new(Method::from(method), target.to_string()))
}
