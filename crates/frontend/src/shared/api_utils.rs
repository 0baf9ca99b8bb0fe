//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses `CRM_API_BASE` when it was set at build time, otherwise the current
/// window location with port 3000 for the backend server.
pub fn api_base() -> String {
    if let Some(base) = &config().api_base {
        return base.clone();
    }
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

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of a REST collection, e.g. `collection_path("leads") == "/api/leads"`
pub fn collection_path(collection: &str) -> String {
    format!("/api/{}", collection)
}

/// Path of one record inside a collection; the id is percent-encoded
pub fn item_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("service_packages"), "/api/service_packages");
        assert_eq!(item_path("developers", "d-7"), "/api/developers/d-7");
    }

    #[test]
    fn test_item_id_is_encoded() {
        assert_eq!(item_path("leads", "a/b c"), "/api/leads/a%2Fb%20c");
        assert_eq!(item_path("leads", "x?y#z"), "/api/leads/x%3Fy%23z");
    }
}
