//! Byte-count and byte-rate formatting for axis labels.
//!
//! Magnitudes are binary (1 KB = 1024 B). Whole numbers are truncated toward
//! zero, the way `%d` formats a float.

// Axis values are non-negative and well inside u64 range
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub const KIB: f64 = 1024.0;
pub const MIB: f64 = KIB * KIB;
pub const GIB: f64 = KIB * KIB * KIB;

/// Binary magnitude buckets, smallest first: (scale, unit suffix)
const MAGNITUDES: [(f64, &str); 3] = [(GIB, "GB"), (MIB, "MB"), (KIB, "KB")];

/// Pick the largest magnitude not above `x`, falling back to plain bytes.
fn magnitude(x: f64) -> (f64, &'static str) {
    MAGNITUDES.into_iter().find(|&(scale, _)| x >= scale).unwrap_or((1.0, "B"))
}

/// Format a byte count: `512B`, `2KB`, `64MB`, `1GB`.
#[must_use]
pub fn format_bytes(x: f64) -> String {
    let (scale, unit) = magnitude(x);
    format!("{}{unit}", (x / scale) as u64)
}

/// Format a byte rate: `900B/s`, `1.5KB/s`, `12KB/s`, `3.2GB/s`.
///
/// Scaled values below 10 keep one decimal; plain bytes never do.
#[must_use]
pub fn format_byte_rate(x: f64) -> String {
    let (scale, unit) = magnitude(x);
    let scaled = x / scale;
    if scale > 1.0 && scaled < 10.0 {
        format!("{scaled:.1}{unit}/s")
    } else {
        format!("{}{unit}/s", scaled as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_bytes_buckets() {
        assert_eq!(format_bytes(0.0), "0B");
        assert_eq!(format_bytes(512.0), "512B");
        assert_eq!(format_bytes(1023.0), "1023B");
        assert_eq!(format_bytes(1024.0), "1KB");
        assert_eq!(format_bytes(2048.0), "2KB");
        assert_eq!(format_bytes(65536.0), "64KB");
        assert_eq!(format_bytes(1_073_741_824.0), "1GB");
    }

    #[test]
    fn test_format_bytes_mebibyte_bucket_uses_mb() {
        assert_eq!(format_bytes(MIB), "1MB");
        assert_eq!(format_bytes(512.0 * MIB), "512MB");
    }

    #[test]
    fn test_format_bytes_truncates() {
        assert_eq!(format_bytes(1535.0), "1KB");
        assert_eq!(format_bytes(2047.9), "1KB");
    }

    #[test]
    fn test_format_byte_rate_plain_bytes_have_no_decimal() {
        assert_eq!(format_byte_rate(0.0), "0B/s");
        assert_eq!(format_byte_rate(999.9), "999B/s");
    }

    #[test]
    fn test_format_byte_rate_small_values_keep_one_decimal() {
        assert_eq!(format_byte_rate(1536.0), "1.5KB/s");
        assert_eq!(format_byte_rate(2.5 * MIB), "2.5MB/s");
        assert_eq!(format_byte_rate(GIB), "1.0GB/s");
    }

    #[test]
    fn test_format_byte_rate_large_values_are_integers() {
        assert_eq!(format_byte_rate(10.0 * KIB), "10KB/s");
        assert_eq!(format_byte_rate(300.0 * MIB), "300MB/s");
        assert_eq!(format_byte_rate(12.7 * GIB), "12GB/s");
    }

    #[test]
    fn test_magnitude_is_monotonic() {
        let units = [512.0, KIB, 10.0 * KIB, MIB, 100.0 * MIB, GIB, 4.0 * GIB]
            .map(|x| magnitude(x).0);
        assert!(units.windows(2).all(|w| w[0] <= w[1]));
    }

    /// `(unit rank, scaled value)` of a formatted size or rate.
    fn parse_label(label: &str) -> (usize, f64) {
        let label = label.trim_end_matches("/s");
        let unit_start = label.find(|c: char| c.is_ascii_alphabetic()).unwrap();
        let rank = ["B", "KB", "MB", "GB"].iter().position(|u| *u == &label[unit_start..]).unwrap();
        (rank, label[..unit_start].parse().unwrap())
    }

    fn ordered_pair() -> impl Strategy<Value = (f64, f64)> {
        (0.0_f64..1e13, 0.0_f64..1e13).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }

    proptest! {
        /// A larger value never lands in a smaller bucket or shows a smaller number.
        #[test]
        fn prop_format_bytes_is_monotonic((a, b) in ordered_pair()) {
            let (lo, hi) = (parse_label(&format_bytes(a)), parse_label(&format_bytes(b)));
            prop_assert!(lo.0 < hi.0 || (lo.0 == hi.0 && lo.1 <= hi.1), "{a} -> {lo:?}, {b} -> {hi:?}");
        }

        #[test]
        fn prop_format_byte_rate_is_monotonic((a, b) in ordered_pair()) {
            let (lo, hi) = (parse_label(&format_byte_rate(a)), parse_label(&format_byte_rate(b)));
            prop_assert!(lo.0 < hi.0 || (lo.0 == hi.0 && lo.1 <= hi.1), "{a} -> {lo:?}, {b} -> {hi:?}");
        }
    }
}
