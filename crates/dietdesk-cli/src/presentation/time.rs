use chrono::{DateTime, Utc};

/// Format an RFC3339 timestamp as relative time ("2 min ago",
/// "yesterday"). Notification times are not always timestamps - the
/// backend also sends human labels like "Just now" - so anything that
/// does not parse passes through unchanged.
pub fn format_relative_time(ts: &str) -> String {
    let parsed = match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return ts.to_string(),
    };

    let now = Utc::now();
    let duration = now.signed_duration_since(parsed);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} weeks ago", weeks)
    } else if days < 365 {
        let months = days / 30;
        format!("{} months ago", months)
    } else {
        let years = days / 365;
        format!("{} years ago", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_recent_timestamp_is_just_now() {
        let ts = Utc::now().to_rfc3339();
        assert_eq!(format_relative_time(&ts), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        let ts = (Utc::now() - chrono::Duration::minutes(5)).to_rfc3339();
        assert_eq!(format_relative_time(&ts), "5 min ago");
    }

    #[test]
    fn test_human_label_passes_through() {
        assert_eq!(format_relative_time("Just now"), "Just now");
        assert_eq!(format_relative_time("10:05"), "10:05");
    }
}
