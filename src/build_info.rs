//! Commit and date stamped in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Line printed by `--version`.
pub fn version_line() -> String {
    format!(
        "bird-games {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_is_iso_day() {
        assert_eq!(BUILD_DATE.len(), 10);
        assert_eq!(BUILD_DATE.matches('-').count(), 2);
    }

    #[test]
    fn test_version_line_names_binary() {
        let line = version_line();
        assert!(line.starts_with("bird-games "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
