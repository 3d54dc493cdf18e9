//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing endpoint URLs.

/// Build a full endpoint URL from a base and a path
///
/// An empty base keeps the URL relative, so requests go to the origin that
/// served the page.
///
/// # Arguments
/// * `base` - API base like "http://localhost:8000" or ""
/// * `path` - Endpoint path like "/ask"
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_same_origin() {
        assert_eq!(api_url("", "/ask"), "/ask");
        assert_eq!(api_url("", "ingest"), "/ingest");
    }

    #[test]
    fn test_api_url_with_base() {
        assert_eq!(api_url("http://localhost:8000", "/ask"), "http://localhost:8000/ask");
        assert_eq!(api_url("http://localhost:8000/", "/ask"), "http://localhost:8000/ask");
        assert_eq!(api_url("https://rag.example.com/api/", "ingest"), "https://rag.example.com/api/ingest");
    }
}
