/// Formats a count with comma thousands separators, e.g. `1,234,567`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short form used on bar labels: `950`, `12.3K`, `4.5M`, `1.2B`
pub fn compact(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in UNITS {
        if value >= scale {
            let scaled = value as f64 / scale as f64;
            return if scaled >= 100.0 {
                format!("{scaled:.0}{suffix}")
            } else {
                format!("{scaled:.1}{suffix}")
            };
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(150), "150");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(100_000_000), "100,000,000");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(950), "950");
        assert_eq!(compact(12_300), "12.3K");
        assert_eq!(compact(4_500_000), "4.5M");
        assert_eq!(compact(103_000_000), "103M");
        assert_eq!(compact(1_200_000_000), "1.2B");
    }
}
