#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = pruefziffer::iban::validate(s);
        let _ = pruefziffer::iban::validate_iban_with_result(s);

        // The exported checksum stages are total over arbitrary input.
        let rearranged = pruefziffer::iban::rearrange(s);
        let numeric = pruefziffer::iban::replace_alpha_chars(&rearranged);
        let _ = pruefziffer::iban::calculate_checksum(&numeric);
    }
});
