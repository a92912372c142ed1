use chrono::Duration;

/// Formats whole seconds as `H:MM:SS`, hours unpadded (2339 → `0:38:59`).
pub fn format_duration(seconds: i64) -> String {
    let d = Duration::seconds(seconds.max(0));
    format!(
        "{}:{:02}:{:02}",
        d.num_hours(),
        d.num_minutes() % 60,
        d.num_seconds() % 60
    )
}

/// Rounds to one decimal place, half away from zero (2.25 → 2.3).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `value` per minute over `minutes`, rounded with [`round1`].
/// Callers guarantee `minutes > 0`.
pub fn per_minute(value: f64, minutes: f64) -> f64 {
    round1(value / minutes)
}
