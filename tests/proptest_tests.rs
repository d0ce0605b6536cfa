//! Property-based tests for the validation pipeline.

use proptest::prelude::*;
use pruefziffer::iban::*;

/// A small pool of known-valid IBANs spanning short (NO, 15) to long
/// (MT, 31) country lengths.
const VALID_IBANS: &[&str] = &[
    "NL11ABNA0481433284",
    "DE12500105170648489890",
    "BE68844010370034",
    "NO5015032080119",
    "MT98MMEB44093000000009027293051",
    "FR7630066100410001057380116",
    "GB32ESSE40486562136016",
];

fn arb_valid_iban() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VALID_IBANS)
}

/// Alphanumeric strings with one disallowed character mixed in.
fn arb_polluted_input() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9]{0,12}",
        prop::sample::select(&[' ', '\t', '-', '.', ',', '*', '!', '😭', 'ß', 'é'][..]),
        "[A-Za-z0-9]{0,12}",
    )
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

proptest! {
    #[test]
    fn disallowed_characters_always_rejected(input in arb_polluted_input()) {
        prop_assert!(!is_valid(&input));
        prop_assert_eq!(validate(&input), Err(IbanError::InvalidCharacters));
    }

    #[test]
    fn unknown_prefix_always_rejected(
        prefix in prop::sample::select(&["QQ", "XX", "ZZ", "QX"][..]),
        tail in "[A-Z0-9]{1,30}",
    ) {
        let iban = format!("{prefix}{tail}");
        prop_assert_eq!(validate(&iban), Err(IbanError::InvalidCountryCode));
    }

    #[test]
    fn wrong_length_with_known_prefix(tail in "[0-9]{1,32}") {
        let iban = format!("DE{tail}");
        // DE requires 22 characters total
        if iban.chars().count() != 22 {
            prop_assert_eq!(validate(&iban), Err(IbanError::InvalidLength));
        }
    }

    // Any single digit substitution changes the residue mod 97 (97 is
    // prime and coprime to 10), so the outcome flips deterministically.
    #[test]
    fn single_digit_mutation_breaks_checksum(
        iban in arb_valid_iban(),
        pos_seed in 0usize..64,
        bump in 1u8..=9,
    ) {
        let bytes = iban.as_bytes();
        let digit_positions: Vec<usize> = (4..bytes.len())
            .filter(|&i| bytes[i].is_ascii_digit())
            .collect();
        let pos = digit_positions[pos_seed % digit_positions.len()];

        let mut mutated = bytes.to_vec();
        mutated[pos] = b'0' + (mutated[pos] - b'0' + bump) % 10;
        let mutated = String::from_utf8(mutated).unwrap();

        prop_assert_eq!(validate(&mutated), Err(IbanError::InvalidChecksum));
    }

    #[test]
    fn clean_iban_is_idempotent(input in ".{0,64}") {
        let once = clean_iban(&input);
        prop_assert_eq!(clean_iban(&once), once.clone());
    }

    #[test]
    fn clean_iban_output_is_alphanumeric(input in ".{0,64}") {
        prop_assert!(clean_iban(&input).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn round_trip_reproduces_check_digits(iban in arb_valid_iban()) {
        let cleaned = clean_iban(iban);
        let calculated = calculate_checksum(&replace_alpha_chars(&rearrange(&cleaned)));
        prop_assert_eq!(&cleaned[2..4], calculated.as_str());
    }

    #[test]
    fn boolean_and_detailed_surfaces_agree(input in ".{0,40}") {
        prop_assert_eq!(is_valid(&input), validate(&input).is_ok());
        prop_assert_eq!(is_valid_with_result(&input).success, is_valid(&input));
    }

    #[test]
    fn validation_never_panics(input in ".{0,128}") {
        let _ = validate(&input);
        let _ = is_valid(&input);
        let _ = validate_iban_with_result(&input);
    }

    #[test]
    fn checksum_stages_never_panic(input in ".{0,64}") {
        let rearranged = rearrange(&input);
        prop_assert!(rearranged.ends_with("00"));
        let _ = calculate_checksum(&replace_alpha_chars(&rearranged));
    }
}
