//! Benchmark profiles and size parsing.

use crate::error::SortError;

/// A preset of array sizes and value range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchProfile {
    pub name: String,
    pub sizes: Vec<usize>,
    pub low: i32,
    pub high: i32,
}

/// Returns the "assignment" profile: 1K and 10K elements in [0, 10000].
pub fn assignment_profile() -> BenchProfile {
    BenchProfile {
        name: "assignment".to_string(),
        sizes: vec![1_000, 10_000],
        low: 0,
        high: 10_000,
    }
}

/// Returns the "practice" profile: 1K, 10K and 100K elements in [0, 99999].
pub fn practice_profile() -> BenchProfile {
    BenchProfile {
        name: "practice".to_string(),
        sizes: vec![1_000, 10_000, 100_000],
        low: 0,
        high: 99_999,
    }
}

/// Lookup a profile by name.
pub fn get_profile(name: &str) -> Result<BenchProfile, SortError> {
    match name.to_ascii_lowercase().as_str() {
        "assignment" => Ok(assignment_profile()),
        "practice" => Ok(practice_profile()),
        _ => Err(SortError::UnknownProfile(name.to_string())),
    }
}

/// Parse a human-readable size string.
///
/// Accepts plain integers with optional `_` separators and `K`/`M` suffixes
/// (decimal, so `10K` is 10 000 and `1.5K` is 1 500).
pub fn parse_size(s: &str) -> Result<usize, SortError> {
    let s = s.trim();
    let invalid = || SortError::InvalidSize(s.to_string());

    let (digits, multiplier) = if let Some(prefix) = s.strip_suffix(['K', 'k']) {
        (prefix, 1_000.0)
    } else if let Some(prefix) = s.strip_suffix(['M', 'm']) {
        (prefix, 1_000_000.0)
    } else {
        return s.replace('_', "").parse().map_err(|_| invalid());
    };

    let num: f64 = digits.replace('_', "").parse().map_err(|_| invalid())?;
    let size = num * multiplier;
    // Must be a whole element count that fits in usize
    if !size.is_finite() || size < 0.0 || size.fract() != 0.0 || size >= usize::MAX as f64 {
        return Err(invalid());
    }
    Ok(size as usize)
}

/// Parse a list of sizes, failing on the first bad entry.
pub fn parse_sizes(raw: &[String]) -> Result<Vec<usize>, SortError> {
    raw.iter().map(|s| parse_size(s)).collect()
}

/// Render a size compactly, e.g. `10K`, `1M`.
pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_plain() {
        assert_eq!(parse_size("1000").unwrap(), 1000);
        assert_eq!(parse_size("10_000").unwrap(), 10_000);
        assert_eq!(parse_size(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size("1K").unwrap(), 1_000);
        assert_eq!(parse_size("10k").unwrap(), 10_000);
        assert_eq!(parse_size("1.5K").unwrap(), 1_500);
        assert_eq!(parse_size("1M").unwrap(), 1_000_000);
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(matches!(parse_size("abc"), Err(SortError::InvalidSize(_))));
        assert!(matches!(parse_size("K"), Err(SortError::InvalidSize(_))));
        assert!(matches!(parse_size("-1K"), Err(SortError::InvalidSize(_))));
        assert!(matches!(parse_size("1.0005K"), Err(SortError::InvalidSize(_))));
        assert!(matches!(parse_size("0.0001K"), Err(SortError::InvalidSize(_))));
        assert!(matches!(parse_size("1e300K"), Err(SortError::InvalidSize(_))));
    }

    #[test]
    fn test_parse_sizes_list() {
        let raw = vec!["1K".to_string(), "10K".to_string()];
        assert_eq!(parse_sizes(&raw).unwrap(), vec![1_000, 10_000]);
        let bad = vec!["1K".to_string(), "x".to_string()];
        assert!(parse_sizes(&bad).is_err());
    }

    #[test]
    fn test_profiles() {
        assert_eq!(get_profile("assignment").unwrap().sizes, vec![1_000, 10_000]);
        let practice = get_profile("Practice").unwrap();
        assert_eq!(practice.sizes, vec![1_000, 10_000, 100_000]);
        assert_eq!(practice.high, 99_999);
        assert!(matches!(get_profile("huge"), Err(SortError::UnknownProfile(_))));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(1500), "1500");
        assert_eq!(format_size(100_000), "100K");
        assert_eq!(format_size(1_000_000), "1M");
    }
}
