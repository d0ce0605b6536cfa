use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure categories, in pipeline priority order.
///
/// Checks run in a fixed sequence with early exit, so a result carries
/// exactly one of these — the first check that failed. The display
/// strings double as the serde representation and are stable for
/// wire/logging compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum IbanError {
    /// Raw input is empty or contains a character outside `[A-Za-z0-9]`.
    #[error("Invalid characters")]
    #[serde(rename = "Invalid characters")]
    InvalidCharacters,

    /// The 2-letter prefix is not a known IBAN country code.
    #[error("Invalid country code")]
    #[serde(rename = "Invalid country code")]
    InvalidCountryCode,

    /// Length exceeds the global 34-character ceiling or does not match
    /// the country's required length.
    #[error("Invalid length")]
    #[serde(rename = "Invalid length")]
    InvalidLength,

    /// Structurally valid but the mod-97 check digits do not match.
    #[error("Invalid checksum")]
    #[serde(rename = "Invalid checksum")]
    InvalidChecksum,

    /// Catch-all kept for wire compatibility. The typed pipeline never
    /// produces it.
    #[error("Unknown error")]
    #[serde(rename = "Unknown error")]
    Unknown,
}
