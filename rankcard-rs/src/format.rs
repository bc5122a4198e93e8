//! Number abbreviation and progress-bar arithmetic.

/// Interior length of the progress track in pixels.
pub const BAR_LENGTH: u32 = 592;

const ABBREVIATIONS: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "K")];

/// Abbreviate a count for display: `999`, `1.5K`, `2K`, `1.5M`.
///
/// One decimal place is kept, and dropped when it rounds to `.0`.
pub fn format_number(value: u64) -> String {
    for (unit, suffix) in ABBREVIATIONS {
        if value >= unit {
            return abbreviate(value, unit, suffix);
        }
    }
    value.to_string()
}

fn abbreviate(value: u64, unit: u64, suffix: &str) -> String {
    // Tenths of a unit, rounded half up
    let unit = unit as u128;
    let tenths = (value as u128 * 10 + unit / 2) / unit;
    let (whole, fraction) = (tenths / 10, tenths % 10);
    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}

/// Filled width of the progress bar in pixels.
///
/// The ratio is clamped to `[0, 1]`, and a zero requirement counts as
/// complete, so the result is always within `0..=BAR_LENGTH`.
pub fn progress_width(current: u64, required: u64) -> u32 {
    if required == 0 {
        return BAR_LENGTH;
    }
    let ratio = current.min(required) as f64 / required as f64;
    (BAR_LENGTH as f64 * ratio).round() as u32
}

/// Evenly spaced gradient offsets over `[0, 1]` for `count` colors.
///
/// A single color sits at offset 0.
pub fn gradient_offsets(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f32;
            (0..n).map(|i| i as f32 / last).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(7, "7")]
    #[case(999, "999")]
    #[case(1_000, "1K")]
    #[case(1_050, "1.1K")]
    #[case(1_500, "1.5K")]
    #[case(2_000, "2K")]
    #[case(12_340, "12.3K")]
    #[case(999_999, "1000K")]
    #[case(1_000_000, "1M")]
    #[case(1_500_000, "1.5M")]
    #[case(25_960_000, "26M")]
    #[case(u64::MAX, "18446744073709.6M")]
    fn test_format_number(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[rstest]
    #[case(0, 100, 0)]
    #[case(100, 100, 592)]
    #[case(50, 100, 296)]
    #[case(250, 1000, 148)]
    #[case(1, 3, 197)]
    #[case(150, 100, 592)]
    #[case(0, 0, 592)]
    #[case(10, 0, 592)]
    fn test_progress_width(#[case] current: u64, #[case] required: u64, #[case] expected: u32) {
        assert_eq!(progress_width(current, required), expected);
    }

    #[test]
    fn test_gradient_offsets_three_stops() {
        assert_eq!(gradient_offsets(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_gradient_offsets_edge_counts() {
        assert!(gradient_offsets(0).is_empty());
        assert_eq!(gradient_offsets(1), vec![0.0]);
        assert_eq!(gradient_offsets(2), vec![0.0, 1.0]);
        let five = gradient_offsets(5);
        assert_eq!(five, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
