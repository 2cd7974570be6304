//! Where the backend lives.
//!
//! The base URL is baked in at compile time from `CAMPUS_HUB_API_URL`, the
//! same way the deployment pipeline injects it, and normalized so the rest of
//! the crate can blindly do `{base}{path}` string concatenation.

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const API_SUFFIX: &str = "/api";

/// The base URL every request is built against, resolved once.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CAMPUS_HUB_API_URL"))
}

/// Strip trailing slashes and make sure the `/api` prefix is present exactly
/// once. An unset or blank value falls back to the local dev server.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or_default().trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BASE_URL.to_string();
    }
    if trimmed.ends_with(API_SUFFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(normalize_base_url(None), "http://localhost:5000/api");
        assert_eq!(normalize_base_url(Some("")), "http://localhost:5000/api");
        assert_eq!(normalize_base_url(Some("   ")), "http://localhost:5000/api");
    }

    #[test]
    fn test_appends_api_suffix_once() {
        assert_eq!(
            normalize_base_url(Some("https://hub.example.edu")),
            "https://hub.example.edu/api"
        );
        assert_eq!(
            normalize_base_url(Some("https://hub.example.edu/api")),
            "https://hub.example.edu/api"
        );
    }

    #[test]
    fn test_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(Some("https://hub.example.edu/")),
            "https://hub.example.edu/api"
        );
        assert_eq!(
            normalize_base_url(Some("https://hub.example.edu/api///")),
            "https://hub.example.edu/api"
        );
    }
}
