mod atomic;

pub use atomic::atomic_write;

use std::path::PathBuf;

/// The name of the per-user aegis folder
pub const AEGIS_FOLDER: &str = ".aegis";

/// Get the path to the per-user aegis folder (`~/.aegis`).
///
/// Falls back to the current directory when no home directory is known.
#[must_use]
pub fn get_aegis_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(AEGIS_FOLDER)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Get current timestamp in milliseconds since the Unix epoch
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aegis_home_ends_with_folder() {
        assert!(get_aegis_home().ends_with(AEGIS_FOLDER));
    }

    #[test]
    fn test_now_iso_format() {
        let now = now_iso();
        assert!(now.contains('T'));
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2023-01-01T00:00:00Z
        assert!(now_millis() > 1_672_531_200_000);
    }
}
