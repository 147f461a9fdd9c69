//! Best-effort numeral normalization.
//!
//! Numbers, money amounts and percentages are rewritten by an ordered chain
//! of string rules rather than parsed by a grammar:
//!
//! 1. Trim, lowercase, strip thousands separators
//! 2. Percentages stop here (magnitude is never scaled)
//! 3. A leading `$` is set aside and re-attached at the end
//! 4. Single-letter suffixes expand (`3k` → `3 thousand`); scale words glued
//!    to a digit are split off (`2billion` → `2 billion`)
//! 5. Two tokens multiply (`2.5 million` → `2500000`)
//! 6. A single spelled-out word resolves through the lexicon (`dozen` → `12`)
//!
//! Anything that does not resolve comes back as the step 1 string, minus any
//! whitespace after the `$`. Products that overflow count as unresolved.

use super::lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

/// Numeral followed by a single-letter scale suffix.
static SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))([kmb])$").expect("valid suffix regex"));

/// Digit immediately followed by a scale word.
static ATTACHED_SCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d)(hundred|thousand|million|billion|trillion|dozen)\b")
        .expect("valid scale regex")
});

/// Normalizes a numeric mention into its canonical numeral string.
///
/// Never fails: unrecognized input is returned trimmed, lowercased and
/// without commas or a space after `$`. Empty and single-character input is returned verbatim.
///
/// # Examples
///
/// ```
/// use bescore_core::canonical::canonicalize_number;
///
/// assert_eq!(canonicalize_number("$2.5 million"), "$2500000");
/// assert_eq!(canonicalize_number("3k"), "3000");
/// assert_eq!(canonicalize_number("20%"), "20%");
/// assert_eq!(canonicalize_number("a dozen"), "a dozen");
/// ```
pub fn canonicalize_number(raw: &str) -> String {
    if raw.chars().count() <= 1 {
        return raw.to_string();
    }

    let normalized = raw.trim().to_lowercase().replace(',', "");
    if normalized.ends_with('%') {
        return normalized;
    }

    let (currency, body) = match normalized.strip_prefix('$') {
        Some(rest) => ("$", rest.trim_start()),
        None => ("", normalized.as_str()),
    };

    match resolve(&expand_scale(body)) {
        Some(value) => format!("{currency}{value}"),
        None => format!("{currency}{body}"),
    }
}

/// Applies the suffix and attached-scale rewrites.
fn expand_scale(body: &str) -> String {
    if let Some(caps) = SUFFIX_RE.captures(body) {
        let scale = match &caps[2] {
            "k" => "thousand",
            "m" => "million",
            _ => "billion",
        };
        return format!("{} {}", &caps[1], scale);
    }
    ATTACHED_SCALE_RE.replace_all(body, "$1 $2").into_owned()
}

/// Resolves a rewritten body to an integer string, if the rules apply.
fn resolve(body: &str) -> Option<String> {
    let tokens: Vec<&str> = body.split_whitespace().collect();
    match tokens.as_slice() {
        [value, scale] => {
            let value = numeral_value(value)?;
            let multiplier = lexicon::lookup(scale)? as f64;
            let product = value * multiplier;
            // Overflowed products would all collapse to "inf"
            product.is_finite().then(|| format_integer(product))
        }
        [word] if parse_finite(word).is_none() => {
            lexicon::lookup(word).map(|value| value.to_string())
        }
        _ => None,
    }
}

/// Reads a token as a float or as a lexicon word.
fn numeral_value(token: &str) -> Option<f64> {
    parse_finite(token).or_else(|| lexicon::lookup(token).map(|v| v as f64))
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_integer(value: f64) -> String {
    let rounded = value.round();
    // Avoid "-0" for tiny negative products
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_scale_word() {
        assert_eq!(canonicalize_number("$2.5 million"), "$2500000");
        assert_eq!(canonicalize_number("$ 4 billion"), "$4000000000");
    }

    #[test]
    fn test_single_letter_suffixes() {
        assert_eq!(canonicalize_number("3k"), "3000");
        assert_eq!(canonicalize_number("3K"), "3000");
        assert_eq!(canonicalize_number("2.5m"), "2500000");
        assert_eq!(canonicalize_number("$1b"), "$1000000000");
    }

    #[test]
    fn test_suffix_requires_a_numeral() {
        // Words ending in k/m/b are not scale suffixes
        assert_eq!(canonicalize_number("book"), "book");
        assert_eq!(canonicalize_number("Slim"), "slim");
    }

    #[test]
    fn test_attached_scale_word() {
        assert_eq!(canonicalize_number("2billion"), "2000000000");
        assert_eq!(canonicalize_number("$3million"), "$3000000");
    }

    #[test]
    fn test_percent_is_untouched() {
        assert_eq!(canonicalize_number("20%"), "20%");
        assert_eq!(canonicalize_number("2 million%"), "2 million%");
        assert_eq!(canonicalize_number(" 1,000% "), "1000%");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(canonicalize_number("1,000"), "1000");
        assert_eq!(canonicalize_number("$12,500"), "$12500");
        assert_eq!(canonicalize_number("1,200 thousand"), "1200000");
    }

    #[test]
    fn test_word_numerals() {
        assert_eq!(canonicalize_number("twenty million"), "20000000");
        assert_eq!(canonicalize_number("Two dozen"), "24");
        assert_eq!(canonicalize_number("dozen"), "12");
        assert_eq!(canonicalize_number("fifteen"), "10");
    }

    #[test]
    fn test_unresolvable_inputs_pass_through() {
        assert_eq!(canonicalize_number("a dozen"), "a dozen");
        assert_eq!(canonicalize_number("5 apples"), "5 apples");
        assert_eq!(canonicalize_number("1.2.3 million"), "1.2.3 million");
        assert_eq!(canonicalize_number("one two three"), "one two three");
        assert_eq!(canonicalize_number("Gazillion"), "gazillion");
    }

    #[test]
    fn test_non_finite_numerals_are_not_numbers() {
        assert_eq!(canonicalize_number("inf million"), "inf million");
        assert_eq!(canonicalize_number("NaN"), "nan");
    }

    #[test]
    fn test_short_strings_returned_verbatim() {
        assert_eq!(canonicalize_number(""), "");
        assert_eq!(canonicalize_number("K"), "K");
        assert_eq!(canonicalize_number("$"), "$");
    }

    #[test]
    fn test_plain_numerals_unchanged() {
        assert_eq!(canonicalize_number("42"), "42");
        assert_eq!(canonicalize_number("3.75"), "3.75");
        assert_eq!(canonicalize_number("$2500000"), "$2500000");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(canonicalize_number("1.0000004 million"), "1000000");
        assert_eq!(canonicalize_number("0.5 dozen"), "6");
        assert_eq!(canonicalize_number("-0.0000001 thousand"), "0");
    }

    #[test]
    fn test_overflowing_products_pass_through() {
        assert_eq!(canonicalize_number("1e300 trillion"), "1e300 trillion");
        assert_eq!(canonicalize_number("9e305 billion"), "9e305 billion");
        assert_ne!(
            canonicalize_number("1e300 trillion"),
            canonicalize_number("9e305 billion")
        );
    }

    #[test]
    fn test_space_after_currency_is_dropped() {
        assert_eq!(canonicalize_number("$ 5"), "$5");
        assert_eq!(canonicalize_number("$ 5"), canonicalize_number("$5"));
        assert_eq!(canonicalize_number("$ lots"), "$lots");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "$2.5 million",
            "3k",
            "20%",
            "twenty million",
            "a dozen",
            "1,000",
            "2billion",
            "fifteen",
            "  Mixed Case  ",
            "$ 7 hundred",
        ];
        for input in inputs {
            let once = canonicalize_number(input);
            let twice = canonicalize_number(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
