//! IBAN structural and checksum validation.
//!
//! The pipeline runs four checks in fixed order with early exit on the
//! first failure: character set, country code, length, mod-97 checksum.
//! Which single error is reported when several problems coexist is
//! determined by that order.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::iban::*;
//!
//! assert!(is_valid("DE12500105170648489890"));
//! assert_eq!(validate("QQ345678901234567890"), Err(IbanError::InvalidCountryCode));
//!
//! // Separators are rejected by the end-to-end validator; strip them
//! // first if the source formats IBANs in groups of four.
//! assert_eq!(validate("DE12 5001 0517 0648 4898 90"), Err(IbanError::InvalidCharacters));
//! assert!(is_valid(&clean_iban("DE12 5001 0517 0648 4898 90")));
//! ```

mod checks;
mod checksum;
mod countries;
mod error;
mod normalize;
mod validate;

pub use checks::{
    MAX_IBAN_LENGTH, check_characters, check_country_code, check_length, has_digit_in_check_positions,
    has_letter_prefix,
};
pub use checksum::{calculate_checksum, letter_value, rearrange, replace_alpha_chars};
pub use countries::{CountryData, countries, country_data, is_known_country_code};
pub use error::IbanError;
pub use normalize::clean_iban;
pub use validate::{
    ValidationOutcome, is_valid, is_valid_with_result, validate, validate_iban,
    validate_iban_with_result,
};
