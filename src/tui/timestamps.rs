use chrono::{DateTime, Local, Utc};

/// Describe how long ago a batch was fetched:
/// - Under a minute: "just now"
/// - Under an hour: "12m ago"
/// - Under a day: "3h ago"
/// - Older: local wall-clock time, "Jan 15 14:03"
pub fn format_fetch_age(fetched_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*fetched_at).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours >= 24 {
        fetched_at.with_timezone(&Local).format("%b %-d %H:%M").to_string()
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_fetch_age(&(now() - Duration::seconds(59)), &now()), "just now");
    }

    #[test]
    fn test_clock_skew_counts_as_just_now() {
        assert_eq!(format_fetch_age(&(now() + Duration::seconds(5)), &now()), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_fetch_age(&(now() - Duration::minutes(45)), &now()), "45m ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_fetch_age(&(now() - Duration::hours(3)), &now()), "3h ago");
    }

    #[test]
    fn test_older_than_a_day_is_absolute() {
        let fetched = now() - Duration::days(2);
        let formatted = format_fetch_age(&fetched, &now());

        assert!(!formatted.ends_with("ago"));
        assert!(formatted.starts_with(&fetched.with_timezone(&Local).format("%b").to_string()));
    }
}
