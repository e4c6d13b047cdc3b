/// Parses a fare as displayed by Google Flights (`$618`, `$1,234`) or typed
/// by hand (`618`) into whole USD. Returns `None` for anything else,
/// including the `N/A` placeholder scraped rows carry.
pub fn parse_price_usd(text: &str) -> Option<u32> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

/// Renders whole USD with thousands separators, e.g. `$1,234`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}

/// A fare alert fires when a recorded price is at or under its ceiling.
pub fn under_ceiling(price_usd: u32, ceiling_usd: u32) -> bool {
    price_usd <= ceiling_usd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_dollar_amount() {
        assert_eq!(parse_price_usd("$618"), Some(618));
    }

    #[test]
    fn test_parse_with_thousands_separator() {
        assert_eq!(parse_price_usd("$1,234"), Some(1234));
    }

    #[test]
    fn test_parse_bare_digits() {
        assert_eq!(parse_price_usd("618"), Some(618));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_price_usd("  $99 "), Some(99));
    }

    #[test]
    fn test_parse_rejects_placeholder_and_garbage() {
        assert_eq!(parse_price_usd("N/A"), None);
        assert_eq!(parse_price_usd(""), None);
        assert_eq!(parse_price_usd("$"), None);
        assert_eq!(parse_price_usd("12.50"), None);
    }

    #[test]
    fn test_format_small_amount() {
        assert_eq!(format_usd(618), "$618");
    }

    #[test]
    fn test_format_with_separators() {
        assert_eq!(format_usd(1234), "$1,234");
        assert_eq!(format_usd(1234567), "$1,234,567");
    }

    #[test]
    fn test_format_parse_agree() {
        assert_eq!(parse_price_usd(&format_usd(98765)), Some(98765));
    }

    #[test]
    fn test_under_ceiling_boundary() {
        assert!(under_ceiling(500, 500));
        assert!(under_ceiling(499, 500));
        assert!(!under_ceiling(501, 500));
    }
}
