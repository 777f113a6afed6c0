//! Content type detection.
//!
//! Returns the Content-Type for a served file based on its extension.

/// Get the Content-Type for a file extension.
///
/// Extensions are matched case-insensitively. Anything outside the small
/// known set is served as `application/octet-stream`.
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension.map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(content_type(Some("html")), "text/html");
        assert_eq!(content_type(Some("htm")), "text/html");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("js")), "application/javascript");
    }

    #[test]
    fn test_extension_case_is_ignored() {
        assert_eq!(content_type(Some("HTML")), "text/html");
        assert_eq!(content_type(Some("Css")), "text/css");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("png")), "application/octet-stream");
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }
}
