//! ISO 7064 mod-97 checksum computation.
//!
//! The IBAN checksum works on a rearranged copy of the account string:
//! the country code moves to the tail, the two check digits are
//! replaced by "00", every letter becomes its two-digit value (A=10 …
//! Z=35), and the resulting decimal number is reduced mod 97. The
//! number can be up to 68 digits, far beyond `u64`, so the reduction
//! streams digit by digit.

/// Numeric value of an IBAN letter: A=10 … Z=35, case-insensitive.
/// Returns `None` for anything that is not an ASCII letter.
pub fn letter_value(c: char) -> Option<u32> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u32 - 'A' as u32 + 10)
    } else {
        None
    }
}

/// Rearrange a cleaned IBAN for checksum calculation:
/// `s[4..] + s[..2] + "00"`.
///
/// The country code moves to the tail, the claimed check digits are
/// dropped and the literal placeholder "00" stands in. Operates on
/// characters and clamps, so inputs shorter than 4 characters simply
/// contribute what they have — total over arbitrary input like the
/// structural checks.
pub fn rearrange(iban: &str) -> String {
    let country: String = iban.chars().take(2).collect();
    let rest: String = iban.chars().skip(4).collect();
    format!("{rest}{country}00")
}

/// Replace every ASCII letter with its two-digit value, upper-casing
/// first; digits pass through unchanged.
///
/// Single pass over the original characters — emitted digits are never
/// re-scanned as letters.
pub fn replace_alpha_chars(iban: &str) -> String {
    let mut out = String::with_capacity(iban.len() * 2);
    for c in iban.chars() {
        match letter_value(c) {
            Some(v) => out.push_str(&v.to_string()),
            None => out.push(c),
        }
    }
    out
}

/// Compute the two-digit IBAN checksum of a numeric string.
///
/// Streaming reduction: for each digit left to right,
/// `rem = (rem * 10 + d) % 97`. The checksum is `98 - rem`, zero-padded
/// to two characters. A remainder of 0 yields "98", not a wrapped
/// single digit. Non-digit characters are skipped.
pub fn calculate_checksum(numeric: &str) -> String {
    let mut remainder: u32 = 0;
    for d in numeric.chars().filter_map(|c| c.to_digit(10)) {
        remainder = (remainder * 10 + d) % 97;
    }
    format!("{:02}", 98 - remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_values() {
        assert_eq!(letter_value('A'), Some(10));
        assert_eq!(letter_value('Z'), Some(35));
        assert_eq!(letter_value('a'), Some(10));
        assert_eq!(letter_value('n'), Some(23));
        assert_eq!(letter_value('0'), None);
        assert_eq!(letter_value('*'), None);
    }

    #[test]
    fn rearranges_country_code_to_tail() {
        assert_eq!(
            rearrange("DE1234567890123456789012"),
            "34567890123456789012DE00"
        );
    }

    #[test]
    fn rearrange_is_total_on_short_input() {
        assert_eq!(rearrange("AB"), "AB00");
        assert_eq!(rearrange("A"), "A00");
        assert_eq!(rearrange(""), "00");
    }

    #[test]
    fn rearrange_is_total_on_multibyte_input() {
        assert_eq!(rearrange("🐶🐷🐶🐷"), "🐶🐷00");
        assert_eq!(rearrange("🐶🐷"), "🐶🐷00");
    }

    #[test]
    fn replaces_letters_with_values() {
        assert_eq!(
            replace_alpha_chars("DE34567890123456789012345"),
            "131434567890123456789012345"
        );
        assert_eq!(
            replace_alpha_chars("NL11ABNA0481433284"),
            "232111101123100481433284"
        );
    }

    #[test]
    fn replacement_handles_lowercase() {
        assert_eq!(
            replace_alpha_chars("nl11abna0481433284"),
            "232111101123100481433284"
        );
    }

    #[test]
    fn calculates_known_checksums() {
        // NL14ABNA0226614812 rearranged and substituted
        assert_eq!(calculate_checksum("101123100226614812232100"), "14");
        // NL11ABNA0481433284 rearranged and substituted
        assert_eq!(calculate_checksum("101123100481433284232100"), "11");
    }

    #[test]
    fn checksum_is_zero_padded() {
        // remainder 96 → 98 - 96 = 2 → "02"
        assert_eq!(calculate_checksum("96"), "02");
    }

    #[test]
    fn remainder_zero_renders_98() {
        // 97 mod 97 = 0 → 98 - 0 = 98, rendered as two digits
        assert_eq!(calculate_checksum("97"), "98");
        assert_eq!(calculate_checksum("0"), "98");
    }
}
