//! Input parsing and display helpers.
//!
//! These functions back the modal inputs: accent colors and salaries arrive
//! as free text, get validated here, and are stored in their canonical
//! numeric form. All functions are pure and synchronous.

use crate::errors::{Error, Result};

/// Parses an accent color from user input.
///
/// Accepts `RRGGBB`, `#RRGGBB`, and `0xRRGGBB` forms. Anything else is
/// rejected with a user-facing [`Error::InvalidColor`].
pub fn parse_accent_color(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor {
            input: input.to_string(),
        });
    }

    u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor {
        input: input.to_string(),
    })
}

/// Formats a stored accent color back into `#RRGGBB` form for display.
#[must_use]
pub fn format_accent_color(color: u32) -> String {
    format!("#{color:06X}")
}

/// Parses a salary amount from user input.
///
/// Accepts plain digits with optional comma grouping and an optional `k`
/// suffix multiplying by 1000 (`150000`, `150,000`, `150k`). The amount must
/// be positive; everything else is rejected with [`Error::InvalidSalary`].
pub fn parse_salary(input: &str) -> Result<i64> {
    let cleaned: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    let invalid = || Error::InvalidSalary {
        input: input.to_string(),
    };

    let (digits, multiplier) = match cleaned.strip_suffix('k') {
        Some(rest) => (rest, 1000),
        None => (cleaned.as_str(), 1),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let amount: i64 = digits.parse().map_err(|_| invalid())?;
    let amount = amount.checked_mul(multiplier).ok_or_else(invalid)?;

    if amount <= 0 {
        return Err(invalid());
    }

    Ok(amount)
}

/// Formats a salary with thousands separators, e.g. `1250000` -> `"1,250,000"`.
#[must_use]
pub fn format_salary(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Extracts the first channel ID from a `<#123456789>` mention anywhere in
/// a message. Returns `None` when the message contains no channel mention.
#[must_use]
pub fn parse_channel_mention(content: &str) -> Option<u64> {
    let start = content.find("<#")?;
    let rest = &content[start + 2..];
    let end = rest.find('>')?;
    let digits = &rest[..end];

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_accent_color_bare() {
        assert_eq!(parse_accent_color("A1B2C3").unwrap(), 0x00A1_B2C3);
    }

    #[test]
    fn test_parse_accent_color_hash_prefix() {
        assert_eq!(parse_accent_color("#a1b2c3").unwrap(), 0x00A1_B2C3);
        assert_eq!(parse_accent_color("  #FFFFFF  ").unwrap(), 0x00FF_FFFF);
    }

    #[test]
    fn test_parse_accent_color_0x_prefix() {
        assert_eq!(parse_accent_color("0x3498DB").unwrap(), 0x0034_98DB);
    }

    #[test]
    fn test_parse_accent_color_rejects_bad_input() {
        for input in ["", "#FFF", "red", "#GGHHII", "1234567", "#12345"] {
            let result = parse_accent_color(input);
            assert!(
                matches!(result, Err(Error::InvalidColor { input: _ })),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_format_accent_color_round_trip() {
        assert_eq!(format_accent_color(0x00A1_B2C3), "#A1B2C3");
        assert_eq!(format_accent_color(0), "#000000");
        let parsed = parse_accent_color(&format_accent_color(0x0012_AB34)).unwrap();
        assert_eq!(parsed, 0x0012_AB34);
    }

    #[test]
    fn test_parse_salary_plain_digits() {
        assert_eq!(parse_salary("150000").unwrap(), 150_000);
    }

    #[test]
    fn test_parse_salary_comma_grouping() {
        assert_eq!(parse_salary("1,250,000").unwrap(), 1_250_000);
        assert_eq!(parse_salary(" 150,000 ").unwrap(), 150_000);
    }

    #[test]
    fn test_parse_salary_k_suffix() {
        assert_eq!(parse_salary("150k").unwrap(), 150_000);
        assert_eq!(parse_salary("2K").unwrap(), 2000);
    }

    #[test]
    fn test_parse_salary_rejects_bad_input() {
        for input in ["", "lots", "-500", "12.5", "k", "1e6", "0"] {
            let result = parse_salary(input);
            assert!(
                matches!(result, Err(Error::InvalidSalary { input: _ })),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(0), "0");
        assert_eq!(format_salary(999), "999");
        assert_eq!(format_salary(1000), "1,000");
        assert_eq!(format_salary(1_250_000), "1,250,000");
        assert_eq!(format_salary(-45_000), "-45,000");
    }

    #[test]
    fn test_parse_channel_mention_basic() {
        assert_eq!(parse_channel_mention("<#123456789>"), Some(123_456_789));
    }

    #[test]
    fn test_parse_channel_mention_in_sentence() {
        assert_eq!(
            parse_channel_mention("use <#987654321> for postings"),
            Some(987_654_321)
        );
    }

    #[test]
    fn test_parse_channel_mention_rejects_non_mentions() {
        assert_eq!(parse_channel_mention("no mention here"), None);
        assert_eq!(parse_channel_mention("<#>"), None);
        assert_eq!(parse_channel_mention("<#abc>"), None);
        assert_eq!(parse_channel_mention("<#123"), None);
    }
}
