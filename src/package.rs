//! Package path validation
//!
//! Package paths end up on the command line of external tools, so they are
//! validated with an allow-list before any process is spawned. Rejecting on
//! an allow-list (rather than blocking known-bad characters) is what keeps
//! shell metacharacters, whitespace and traversal sequences out by
//! construction.

/// Check whether `path` is a well-formed relative Go package path.
///
/// Valid paths are non-empty, consist only of letters, digits, `_`, `-` and
/// `/` separators, do not start or end with `/`, and contain no `..`
/// segment.
///
/// # Examples
///
/// ```
/// use pgogen::package::validate_package_path;
///
/// assert!(validate_package_path("cmd/server"));
/// assert!(validate_package_path("internal/adapters/inbound"));
/// assert!(!validate_package_path("../etc/passwd"));
/// assert!(!validate_package_path("cmd; rm -rf /"));
/// ```
pub fn validate_package_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '/')
    {
        return false;
    }

    if path.starts_with('/') || path.ends_with('/') {
        return false;
    }

    // Traversal is rejected explicitly, not just via the missing '.' above
    if path.split('/').any(|segment| segment == "..") {
        return false;
    }

    true
}
