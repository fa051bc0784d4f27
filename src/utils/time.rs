use chrono::NaiveDateTime;

/// Format a countdown until a session starts (e.g. "2h 5m", "3 days", "45 minutes").
///
/// Days once more than 24 full hours remain, "Hh Mm" while at least one full
/// hour remains, whole minutes below that.
pub fn format_countdown(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;

    if hours > 24 {
        let days = hours / 24;
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", days)
        }
    } else if hours >= 1 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

/// Format a timestamp as relative time (e.g. "5m", "2h", "3d")
///
/// Used on chat messages and booking rows. Anything older than a week shows
/// as a month-day date instead. Both instants are explicit so the function
/// stays pure.
pub fn format_relative_time(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = (now - then).num_seconds();

    if diff < 60 {
        return "just now".to_string();
    }

    match diff {
        60..=3599 => format!("{}m", diff / 60),
        3600..=86399 => format!("{}h", diff / 3600),
        86400..=604799 => format!("{}d", diff / 86400),
        _ => then.format("%b %d").to_string(),
    }
}
