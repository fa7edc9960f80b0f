use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Origins allowed when none are configured: the console served from this machine.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Split a comma-separated origin list, dropping blanks.
#[must_use]
pub fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `origin` is covered by `allowed`.
///
/// An entry matches the exact origin and the same origin with any port, so
/// `http://localhost` admits `http://localhost:5173`. `*` admits everything.
#[must_use]
pub fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| {
        entry == "*"
            || origin == entry
            || origin
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.starts_with(':'))
    })
}

/// CORS for the REST API with the given allowed origins.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(&cors_origins, origin))
        }))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,https://b.test"),
            vec!["http://a.test", "https://b.test"]
        );
    }

    #[test]
    fn test_default_origins_allow_local_ports() {
        let allowed = parse_origins(DEFAULT_CORS_ORIGINS);
        assert!(origin_allowed(&allowed, "http://localhost"));
        assert!(origin_allowed(&allowed, "http://localhost:5173"));
        assert!(origin_allowed(&allowed, "https://127.0.0.1:8443"));
        assert!(!origin_allowed(&allowed, "http://localhost.evil.test"));
        assert!(!origin_allowed(&allowed, "https://example.com"));
    }

    #[test]
    fn test_wildcard_allows_all() {
        assert!(origin_allowed(&["*".to_string()], "https://example.com"));
    }
}
