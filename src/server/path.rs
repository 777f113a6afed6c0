//! Request target decoding and web-root containment.
//!
//! A request target becomes a filesystem path in two steps: percent-decode
//! the raw target, then map the decoded path onto the web root while
//! collapsing `.` and `..` segments. A path that would climb above the web
//! root does not resolve at all; the caller answers it with 404.

use std::path::{Component, Path, PathBuf};

/// The file served when the request path is empty or blank.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Percent-decode a request target as UTF-8.
///
/// Returns `None` when the decoded bytes are not valid UTF-8. Malformed
/// percent sequences such as `%zz` pass through verbatim and simply fail to
/// match any file later.
pub fn decode_target(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|decoded| decoded.into_owned())
}

/// Map a decoded request target onto the web root.
///
/// Strips one leading `/`, substitutes [`DEFAULT_DOCUMENT`] for an empty or
/// blank path, and collapses `.` and `..` segments lexically. Returns `None`
/// when the target escapes the web root: either a `..` segment climbs above
/// it, or the target is absolute (which would replace the web root entirely
/// on join).
pub fn resolve_target(web_root: &Path, decoded: &str) -> Option<PathBuf> {
    let relative = decoded.strip_prefix('/').unwrap_or(decoded);
    let relative = if relative.trim().is_empty() {
        DEFAULT_DOCUMENT
    } else {
        relative
    };

    let mut resolved = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(web_root.join(resolved))
}
