//! Pluralization helpers for report lines.

/// `""` for one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(2, "rule")` -> `"2 rules"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "overlap"), "0 overlaps");
        assert_eq!(plural_count(1, "overlap"), "1 overlap");
        assert_eq!(plural_count(6, "rule"), "6 rules");
    }
}
