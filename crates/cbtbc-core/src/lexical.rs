//! Word-level lexical tests shared by the numeric conditions.

/// Percent marker recognised at the end of a word.
pub const PERCENT_MARKER: char = '%';

/// Whether the word parses as a real number.
///
/// Accepts anything the standard float parser accepts, including
/// exponents (`1e5`), signs, `inf` and `nan`. Digit-group underscores
/// (`1_000`) and surrounding whitespace are rejected.
pub fn is_float(word: &str) -> bool {
    word.parse::<f64>().is_ok()
}

/// Whether the word is a number immediately followed by `%`.
pub fn is_percent(word: &str) -> bool {
    word.strip_suffix(PERCENT_MARKER).is_some_and(is_float)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_parse() {
        assert!(is_float("123.45"));
        assert!(is_float("-7"));
        assert!(is_float("1e5"));
        assert!(!is_float("notafloat"));
        assert!(!is_float(""));
        assert!(!is_float("50%"));
    }

    #[test]
    fn digit_groups_and_padding_are_not_numbers() {
        assert!(!is_float("1_000"));
        assert!(!is_float(" 12"));
        assert!(!is_percent("1_000%"));
    }

    #[test]
    fn percents_need_a_numeric_prefix() {
        assert!(is_percent("50%"));
        assert!(is_percent("100.00%"));
        assert!(!is_percent("notapercent"));
        assert!(!is_percent("%"));
        assert!(!is_percent("abc%"));
        assert!(!is_percent("50"));
    }
}
