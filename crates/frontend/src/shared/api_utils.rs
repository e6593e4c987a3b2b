//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build an API path from a resource prefix and a raw identifier
///
/// The identifier is percent-encoded so that claim ids containing `/`, `?`
/// or spaces cannot escape their path segment.
///
/// # Example
/// ```ignore
/// assert_eq!(resource_path("/api/claims", "C 1"), "/api/claims/C%201");
/// ```
pub fn resource_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
