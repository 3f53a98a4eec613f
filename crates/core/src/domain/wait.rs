// Wait estimation - the arithmetic and phrasing behind "how long until
// it's my turn"

use chrono::{DateTime, Duration, Utc};

/// Minutes a person at `position` can expect to wait. Position 1 waits
/// zero minutes: they are next.
pub fn estimated_wait_minutes(position: usize, time_per_person: u32) -> u32 {
    (position.saturating_sub(1) as u32) * time_per_person
}

/// Wall-clock moment a person at `position` can expect to be served.
pub fn estimated_service_time(
    now: DateTime<Utc>,
    position: usize,
    time_per_person: u32,
) -> DateTime<Utc> {
    now + Duration::minutes(i64::from(estimated_wait_minutes(position, time_per_person)))
}

/// Human-readable wait time ("1 hour 5 minutes").
pub fn format_wait_time(minutes: u32) -> String {
    match minutes {
        0 => "Less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 60 => format!("{} minutes", m),
        m => {
            let hours = m / 60;
            let remaining = m % 60;
            let hour_word = if hours == 1 { "hour" } else { "hours" };
            if remaining == 0 {
                format!("{} {}", hours, hour_word)
            } else {
                let minute_word = if remaining == 1 { "minute" } else { "minutes" };
                format!("{} {} {} {}", hours, hour_word, remaining, minute_word)
            }
        }
    }
}

/// Encouragement line for a guest at `position`.
pub fn position_text(position: usize) -> &'static str {
    match position {
        1 => "You're next!",
        2 => "Almost there!",
        3..=5 => "Getting closer!",
        _ => "In the queue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_wait_is_people_ahead_times_rate() {
        assert_eq!(estimated_wait_minutes(1, 5), 0);
        assert_eq!(estimated_wait_minutes(2, 5), 5);
        assert_eq!(estimated_wait_minutes(4, 10), 30);
    }

    #[test]
    fn test_format_wait_time_table() {
        assert_eq!(format_wait_time(0), "Less than a minute");
        assert_eq!(format_wait_time(1), "1 minute");
        assert_eq!(format_wait_time(59), "59 minutes");
        assert_eq!(format_wait_time(60), "1 hour");
        assert_eq!(format_wait_time(61), "1 hour 1 minute");
        assert_eq!(format_wait_time(120), "2 hours");
        assert_eq!(format_wait_time(125), "2 hours 5 minutes");
    }

    #[test]
    fn test_position_text_bands() {
        assert_eq!(position_text(1), "You're next!");
        assert_eq!(position_text(2), "Almost there!");
        assert_eq!(position_text(3), "Getting closer!");
        assert_eq!(position_text(5), "Getting closer!");
        assert_eq!(position_text(6), "In the queue");
    }

    #[test]
    fn test_estimated_service_time_offsets_now() {
        let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let eta = estimated_service_time(now, 3, 5);
        assert_eq!(eta - now, Duration::minutes(10));
    }
}
