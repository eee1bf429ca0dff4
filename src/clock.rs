use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Identifier for saved stories and dream canvases, e.g. `2026-08-25T19:04:11Z`.
pub fn story_id() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| display_timestamp())
}

/// Timestamp shown on saved entries, e.g. `2026-08-25 19:04:11`.
pub fn display_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Twelve-hour timestamp for the story info bar, e.g. `08/25/2026, 07:04:11 PM`.
pub fn info_bar_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    let hour24 = now.hour();
    let hour12 = match hour24 % 12 {
        0 => 12,
        other => other,
    };
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    format!(
        "{:02}/{:02}/{:04}, {:02}:{:02}:{:02} {meridiem}",
        u8::from(now.month()),
        now.day(),
        now.year(),
        hour12,
        now.minute(),
        now.second()
    )
}

/// Prefix for progress log lines, e.g. `19:04:11`.
pub fn log_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

/// Today's date in the form the visible-planets API expects, e.g. `2026-08-25`.
pub fn today() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02}",
        now.year(),
        u8::from(now.month()),
        now.day()
    )
}

#[cfg(test)]
mod tests {
    use super::{display_timestamp, info_bar_timestamp, log_timestamp, story_id, today};

    #[test]
    fn story_id_is_rfc3339() {
        let id = story_id();
        assert!(id.starts_with("20"));
        assert!(id.contains('T'));
        assert!(id.ends_with('Z'));
    }

    #[test]
    fn display_timestamp_has_expected_shape() {
        let ts = display_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn info_bar_timestamp_is_twelve_hour() {
        let ts = info_bar_timestamp();
        assert!(ts.ends_with(" AM") || ts.ends_with(" PM"));
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[10..12], ", ");
        let hour: u8 = ts[12..14].parse().expect("hour digits");
        assert!((1..=12).contains(&hour));
    }

    #[test]
    fn log_timestamp_is_clock_only() {
        let ts = log_timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[5..6], ":");
    }

    #[test]
    fn today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }
}
