//! Display formatting shared by the view-model shapers.

use chrono::NaiveDate;

/// `"2024-05-01"` -> `"May 1, 2024"`. `None` for a missing or blank date; an
/// unparseable date is passed through untouched.
pub fn long_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date.format("%B %-d, %Y").to_string()),
        Err(_) => Some(raw.to_string()),
    }
}

pub fn release_year(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    raw.get(..4).map(str::to_string)
}

/// Whole minutes as `"Xh Ym"`.
pub fn runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rescales a 0-10 vote average onto 0-100.
pub fn metascore(vote_average: f64) -> f64 {
    vote_average * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_dates() {
        assert_eq!(long_date(Some("2024-05-01")).as_deref(), Some("May 1, 2024"));
        assert_eq!(
            long_date(Some("2025-12-25")).as_deref(),
            Some("December 25, 2025")
        );
        assert_eq!(long_date(Some("")), None);
        assert_eq!(long_date(None), None);
        assert_eq!(long_date(Some("2025")).as_deref(), Some("2025"));
    }

    #[test]
    fn extracts_release_year() {
        assert_eq!(release_year(Some("1999-03-31")).as_deref(), Some("1999"));
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(Some("99")), None);
    }

    #[test]
    fn formats_runtime() {
        assert_eq!(runtime(125), "2h 5m");
        assert_eq!(runtime(60), "1h 0m");
        assert_eq!(runtime(59), "0h 59m");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn rescales_metascore() {
        assert_eq!(metascore(7.8), 7.8 * 10.0);
        assert_eq!(metascore(0.0), 0.0);
        assert_eq!(metascore(10.0), 100.0);
        assert!((metascore(8.368) - 83.68).abs() < 1e-9);
        assert!((metascore(6.125) - 61.25).abs() < 1e-9);
        assert_eq!(one_decimal(7.8), "7.8");
        assert_eq!(one_decimal(8.0), "8.0");
    }
}
