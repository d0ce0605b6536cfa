//! # pruefziffer
//!
//! IBAN validation: structural well-formedness (allowed characters,
//! country-specific length) and arithmetic correctness (ISO 7064 mod-97
//! checksum).
//!
//! Everything is a pure function over the input string plus two embedded
//! constant tables (country → required length, letter → digit value).
//! No I/O, no shared mutable state — every call is independent and safe
//! to issue concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::iban::*;
//!
//! assert!(is_valid("NL11ABNA0481433284"));
//!
//! let err = validate("DE99500105170648489890").unwrap_err();
//! assert_eq!(err, IbanError::InvalidChecksum);
//! assert_eq!(err.to_string(), "Invalid checksum");
//!
//! // Country metadata is available directly.
//! assert_eq!(country_data("de").unwrap().iban_length, 22);
//! ```

pub mod iban;

// Re-export the validation surface at crate root for convenience
pub use crate::iban::*;
