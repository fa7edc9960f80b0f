//! Server-side identifier generation.

/// Generate an opaque, kind-prefixed identifier such as `cust_<uuid>`.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}{}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_has_prefix_and_uuid() {
        let id = generate_id("cust_");
        let rest = id.strip_prefix("cust_").unwrap();
        assert!(uuid::Uuid::parse_str(rest).is_ok());
    }

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(generate_id("pol_"), generate_id("pol_"));
    }
}
