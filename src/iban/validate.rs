//! End-to-end validation façade.
//!
//! One internal pipeline, several thin surfaces on top: a detailed
//! `Result`, a plain boolean, a serializable outcome, and a
//! reversed-polarity compatibility pair that reports failure only
//! through `Err` and never as a returned `false`.

use serde::Serialize;

use super::checks::{check_characters, check_country_code, check_length};
use super::checksum::{calculate_checksum, rearrange, replace_alpha_chars};
use super::error::IbanError;
use super::normalize::clean_iban;

/// Validate an IBAN, reporting the first check that failed.
///
/// Checks run in fixed order with early exit: character set, country
/// code, length, then the mod-97 checksum. The first three run on the
/// raw input; the checksum runs on the cleaned form.
pub fn validate(iban: &str) -> Result<(), IbanError> {
    check_characters(iban)?;
    check_country_code(iban)?;
    check_length(iban)?;
    check_checksum(iban)
}

/// `true` only when every check passes.
pub fn is_valid(iban: &str) -> bool {
    validate(iban).is_ok()
}

/// Validate and return the serializable `{ success, error }` outcome.
pub fn is_valid_with_result(iban: &str) -> ValidationOutcome {
    validate(iban).into()
}

/// Compatibility entry point with reversed polarity: `Ok(true)` on
/// success, the specific [`IbanError`] on any failure. Never returns
/// `Ok(false)`.
pub fn validate_iban(iban: &str) -> Result<bool, IbanError> {
    validate(iban).map(|()| true)
}

/// Compatibility wrapper over [`validate_iban`], folding the error back
/// into the `{ success, error }` outcome shape.
pub fn validate_iban_with_result(iban: &str) -> ValidationOutcome {
    match validate_iban(iban) {
        Ok(success) => ValidationOutcome { success, error: None },
        Err(error) => ValidationOutcome { success: false, error: Some(error) },
    }
}

/// Tagged validation outcome: success, or exactly one error kind.
///
/// Serializes to `{"success":true}` or
/// `{"success":false,"error":"Invalid checksum"}` — the stable shape
/// callers log and put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Whether all checks passed.
    pub success: bool,
    /// The first failed check, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IbanError>,
}

impl From<Result<(), IbanError>> for ValidationOutcome {
    fn from(result: Result<(), IbanError>) -> Self {
        match result {
            Ok(()) => Self { success: true, error: None },
            Err(error) => Self { success: false, error: Some(error) },
        }
    }
}

/// Recompute the mod-97 checksum of the cleaned input and compare it
/// against the claimed check digits (characters 3–4).
///
/// Comparison is textual, not numeric — claimed check digits like "7"
/// or "A1" can never equal a calculated two-digit string.
fn check_checksum(iban: &str) -> Result<(), IbanError> {
    // Structural checks already passed, so cleaning is a no-op here;
    // kept so the checksum path is total on its own.
    let cleaned = clean_iban(iban);

    let claimed: String = cleaned.chars().skip(2).take(2).collect();
    let calculated = calculate_checksum(&replace_alpha_chars(&rearrange(&cleaned)));

    if claimed == calculated {
        Ok(())
    } else {
        Err(IbanError::InvalidChecksum)
    }
}
