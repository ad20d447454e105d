//! Endpoint paths relative to the configured base URL.
//!
//! Joins trim the trailing slash so a base of `https://host/api/v1/`
//! and `https://host/api/v1` produce the same URL.

pub fn notifications(base_url: &str) -> String {
    format!("{}/notifications", base_url.trim_end_matches('/'))
}

pub fn notification_read(base_url: &str, id: i64) -> String {
    format!("{}/notifications/{}/read", base_url.trim_end_matches('/'), id)
}

pub fn notifications_read_all(base_url: &str) -> String {
    format!("{}/notifications/read-all", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_url() {
        assert_eq!(
            notifications("https://host/api/v1"),
            "https://host/api/v1/notifications"
        );
    }

    #[test]
    fn test_trailing_slash_collapsed() {
        assert_eq!(
            notifications("https://host/api/v1/"),
            "https://host/api/v1/notifications"
        );
    }

    #[test]
    fn test_read_url_carries_id() {
        assert_eq!(
            notification_read("https://host/api/v1", 42),
            "https://host/api/v1/notifications/42/read"
        );
    }

    #[test]
    fn test_read_all_url() {
        assert_eq!(
            notifications_read_all("https://host/api/v1"),
            "https://host/api/v1/notifications/read-all"
        );
    }
}
