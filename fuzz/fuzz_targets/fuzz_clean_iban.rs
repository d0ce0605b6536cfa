#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let cleaned = pruefziffer::iban::clean_iban(s);
        // Cleaning is idempotent and its output pure ASCII alphanumeric.
        assert!(cleaned.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(pruefziffer::iban::clean_iban(&cleaned), cleaned);
    }
});
