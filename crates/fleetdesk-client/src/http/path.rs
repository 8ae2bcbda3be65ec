//! Path rewriting applied before a relative path is joined onto the base URL.

/// Prefix of every backend route; these routes always end with a slash.
const API_PREFIX: &str = "/api/";

/// Returns true for absolute `http://` or `https://` URLs.
pub(crate) fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalizes a request path.
///
/// Absolute URLs are returned untouched. Relative paths gain a leading `/`
/// when missing, and paths under `/api/` gain a trailing `/` ahead of any
/// query string, since the backend only routes slash-terminated paths.
///
/// ```
/// use fleetdesk_client::normalize_path;
///
/// assert_eq!(normalize_path("api/v1/x"), "/api/v1/x/");
/// assert_eq!(normalize_path("/api/v1/x?page=2"), "/api/v1/x/?page=2");
/// assert_eq!(normalize_path("/health"), "/health");
/// ```
pub fn normalize_path(path: &str) -> String {
    if is_absolute(path) {
        return path.to_owned();
    }

    let (route, query) = match path.split_once('?') {
        Some((route, query)) => (route, Some(query)),
        None => (path, None),
    };

    let mut normalized = String::with_capacity(path.len() + 2);
    if !route.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(route);

    if normalized.starts_with(API_PREFIX) && !normalized.ends_with('/') {
        normalized.push('/');
    }

    if let Some(query) = query {
        normalized.push('?');
        normalized.push_str(query);
    }

    normalized
}
