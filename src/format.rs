/// Formats fractional hours as `"{h} hrs {m} mins"`, dropping whichever part
/// is zero. Negative or non-finite input reads as zero.
pub fn format_hours(hours: f64) -> String {
    let minutes = if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as u64
    } else {
        0
    };
    let h = minutes / 60;
    let m = minutes % 60;

    match (h, m) {
        (0, m) => format!("{m} mins"),
        (h, 0) => format!("{h} hrs"),
        (h, m) => format!("{h} hrs {m} mins"),
    }
}
