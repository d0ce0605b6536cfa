//! Input normalization.

/// Strip every character outside `[A-Za-z0-9]`.
///
/// Spaces, tabs, dashes, and any non-ASCII code point are deleted;
/// order and case of the remaining characters are preserved. Total over
/// all inputs, including the empty string, and idempotent.
///
/// The end-to-end validator rejects separators outright (character-set
/// validation runs on the raw input). Callers holding display-formatted
/// IBANs ("DE12 3456 …") should clean them with this function first.
pub fn clean_iban(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_spaces() {
        assert_eq!(clean_iban("DE12 3456 7890 1234 5678 90"), "DE12345678901234567890");
    }

    #[test]
    fn cleans_tabs() {
        assert_eq!(clean_iban("DE12\t3456\t7890\t1234\t5678\t90"), "DE12345678901234567890");
    }

    #[test]
    fn cleans_dashes() {
        assert_eq!(clean_iban("DE12-3456-7890-1234-5678-90"), "DE12345678901234567890");
    }

    #[test]
    fn cleans_non_ascii() {
        assert_eq!(clean_iban("DE*123,456789🐶01234567890"), "DE12345678901234567890");
        assert_eq!(clean_iban("😭😩"), "");
    }

    #[test]
    fn preserves_case_and_order() {
        assert_eq!(clean_iban("nl11 abNA 0481"), "nl11abNA0481");
    }

    #[test]
    fn total_over_empty_input() {
        assert_eq!(clean_iban(""), "");
    }

    #[test]
    fn idempotent() {
        let once = clean_iban("DE12 3456-7890");
        assert_eq!(clean_iban(&once), once);
    }
}
