//! Human-readable rendering of raw attribute values.
//!
//! Durations, sizes and bit rates get dedicated formatting, selected by exact
//! key. Anything that does not parse as a number is echoed unchanged.

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format `raw` for display according to the attribute `key`.
pub fn format_value(key: &str, raw: &str) -> String {
    let formatted = match key {
        "duration" => format_duration_ms(raw),
        "file_size" | "stream_size" => format_size(raw),
        "bit_rate" | "overall_bit_rate" | "maximum_bit_rate" => format_bit_rate(raw),
        _ => None,
    };
    formatted.unwrap_or_else(|| raw.to_string())
}

/// Parse an integer the lenient way extractors report them (`"1500"`,
/// `"1500.0"`, `" 1500 "`), truncating any fraction.
fn parse_integer(raw: &str) -> Option<i64> {
    let v = parse_whole(raw)?;
    if v.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(v as i64)
}

/// Finite number with any fraction truncated, at full `f64` range.
fn parse_whole(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    v.is_finite().then(|| v.trunc())
}

/// Milliseconds as `MM:SS`, or `HH:MM:SS` once an hour is reached.
fn format_duration_ms(raw: &str) -> Option<String> {
    let ms = parse_integer(raw)?;
    if ms < 0 {
        return None;
    }
    let seconds = ms / 1000;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        Some(format!("{hours:02}:{minutes:02}:{secs:02}"))
    } else {
        Some(format!("{minutes:02}:{secs:02}"))
    }
}

/// Bytes, scaled by 1024 until the value drops below 1024. Sizes beyond
/// the integer range still scale into PB; negative sizes are rejected.
fn format_size(raw: &str) -> Option<String> {
    let mut size = parse_whole(raw)?;
    if size < 0.0 {
        return None;
    }
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return Some(format!("{size:.1} {unit}"));
        }
        size /= 1024.0;
    }
    Some(format!("{size:.1} PB"))
}

/// Bits per second with decimal (1000-based) prefixes.
fn format_bit_rate(raw: &str) -> Option<String> {
    let bps = parse_integer(raw)?;
    let text = if bps >= 1_000_000 {
        format!("{:.1} Mbps", bps as f64 / 1_000_000.0)
    } else if bps >= 1_000 {
        format!("{:.1} kbps", bps as f64 / 1_000.0)
    } else {
        format!("{bps} bps")
    };
    Some(text)
}
