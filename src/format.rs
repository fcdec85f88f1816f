//! Human-readable byte counts.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Scales `bytes` to the largest unit under which the value stays below 1024.
///
/// The number is printed with the default `f64` formatting, so whole values
/// carry no fractional part:
/// ```text
/// 0        -> "0 B"
/// 1023     -> "1023 B"
/// 1024     -> "1 KB"
/// 1536     -> "1.5 KB"
/// 1048576  -> "1 MB"
/// ```
/// Gigabytes are the ceiling; anything larger stays in GB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", value, UNITS[unit])
}
