//! Unit scaling for series values
//!
//! Durations are plotted in milliseconds and sizes in bytes, whatever unit
//! the API reports them in.

const DURATION_UNITS: &[(&str, f64)] = &[
    ("nanosecond", 1.0 / 1_000_000.0),
    ("microsecond", 1.0 / 1000.0),
    ("millisecond", 1.0),
    ("second", 1000.0),
    ("minute", 60_000.0),
    ("hour", 3_600_000.0),
    ("day", 86_400_000.0),
    ("week", 604_800_000.0),
];

const SIZE_UNITS: &[(&str, f64)] = &[
    ("bit", 1.0 / 8.0),
    ("byte", 1.0),
    ("kibibyte", 1024.0),
    ("mebibyte", 1_048_576.0),
    ("gibibyte", 1_073_741_824.0),
    ("tebibyte", 1_099_511_627_776.0),
    ("kilobyte", 1000.0),
    ("megabyte", 1_000_000.0),
    ("gigabyte", 1_000_000_000.0),
    ("terabyte", 1_000_000_000_000.0),
];

/// Multiplier that converts a value in `unit` to milliseconds or bytes.
/// Unknown or absent units scale by 1.
pub fn unit_scale(unit: Option<&str>) -> f64 {
    let Some(unit) = unit else {
        return 1.0;
    };
    DURATION_UNITS
        .iter()
        .chain(SIZE_UNITS.iter())
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales() {
        assert_eq!(unit_scale(Some("second")), 1000.0);
        assert_eq!(unit_scale(Some("kibibyte")), 1024.0);
        assert_eq!(unit_scale(Some("millisecond")), 1.0);
        assert_eq!(unit_scale(Some("furlong")), 1.0);
        assert_eq!(unit_scale(None), 1.0);
    }
}
