//! Structural checks on the raw input.
//!
//! Each check is an independent pure predicate over the unmodified
//! caller string. The façade runs them in a fixed order (characters,
//! country code, length); every check here is also usable standalone
//! and must not panic on arbitrary input — short strings and multi-byte
//! code points included, which is why slicing is always by `char`,
//! never by byte offset.

use super::countries::country_data;
use super::error::IbanError;

/// Global IBAN length ceiling, independent of country.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Character-set check: the input must be non-empty and consist
/// entirely of ASCII letters and digits.
///
/// Whitespace, punctuation, and non-ASCII code points all fail here —
/// separators are not tolerated by the end-to-end validator.
pub fn check_characters(iban: &str) -> Result<(), IbanError> {
    if !iban.is_empty() && iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(IbanError::InvalidCharacters)
    }
}

/// Country-code check: the first two characters, upper-cased, must be a
/// known IBAN country code. Inputs shorter than two characters are
/// simply not found.
pub fn check_country_code(iban: &str) -> Result<(), IbanError> {
    let prefix: String = iban.chars().take(2).collect();
    if country_data(&prefix).is_some() {
        Ok(())
    } else {
        Err(IbanError::InvalidCountryCode)
    }
}

/// Length check: at most [`MAX_IBAN_LENGTH`] characters overall, and
/// exactly the required length for the country named by the prefix.
///
/// An unknown country code reports [`IbanError::InvalidCountryCode`].
/// That branch is unreachable in the pipeline (the country-code check
/// runs first) but matters when this check is used standalone.
pub fn check_length(iban: &str) -> Result<(), IbanError> {
    let len = iban.chars().count();
    if len > MAX_IBAN_LENGTH {
        return Err(IbanError::InvalidLength);
    }

    let prefix: String = iban.chars().take(2).collect();
    match country_data(&prefix) {
        Some(country) if len == country.iban_length => Ok(()),
        Some(_) => Err(IbanError::InvalidLength),
        None => Err(IbanError::InvalidCountryCode),
    }
}

/// True if the input starts with two ASCII letters (either case).
///
/// Shape predicate only — it does not consult the country registry.
pub fn has_letter_prefix(iban: &str) -> bool {
    let mut chars = iban.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(a), Some(b)) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic()
    )
}

/// True if the check-digit positions (characters 3–4) contain at least
/// one ASCII digit.
pub fn has_digit_in_check_positions(iban: &str) -> bool {
    iban.chars().skip(2).take(2).any(|c| c.is_ascii_digit())
}
