//! API utilities for frontend-backend communication
//!
//! Provides the base URLs of the collection API and of the static fixtures.

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

/// Where the collection endpoints and the fixtures live.
///
/// Provided once through context by the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub fixture_base: String,
}

impl ApiConfig {
    pub fn new(api_base: impl Into<String>, fixture_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_slash(api_base.into()),
            fixture_base: trim_slash(fixture_base.into()),
        }
    }

    /// Both bases derived from the window location
    pub fn from_location() -> Self {
        let base = api_base();
        Self::new(base.clone(), base)
    }

    /// `/api/{resource}`
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.api_base, resource)
    }

    /// `/api/{resource}/{id}`
    pub fn item_url(&self, resource: &str, id: i64) -> String {
        format!("{}/{}", self.resource_url(resource), id)
    }

    pub fn fixture_url(&self, file: &str) -> String {
        format!("{}/{}", self.fixture_base, file.trim_start_matches('/'))
    }
}

fn trim_slash(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ApiConfig::new("http://localhost:3000/", "http://localhost:3000");
        assert_eq!(config.resource_url("rooms"), "http://localhost:3000/api/rooms");
        assert_eq!(config.item_url("bookings", 7), "http://localhost:3000/api/bookings/7");
        assert_eq!(
            config.fixture_url("/facilities.json"),
            "http://localhost:3000/facilities.json"
        );
    }
}
