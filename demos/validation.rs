use pruefziffer::iban::*;

fn main() {
    let candidates = [
        "NL11ABNA0481433284",          // valid
        "DE12500105170648489890",      // valid
        "DE99500105170648489890",      // wrong check digits
        "QQ345678901234567890",        // unknown country
        "DE123",                       // wrong length
        "DE12 5001 0517 0648 4898 90", // separators rejected as-is
    ];

    for candidate in candidates {
        match validate(candidate) {
            Ok(()) => println!("{candidate}: valid"),
            Err(e) => println!("{candidate}: {e}"),
        }
    }

    // Display-formatted input must be cleaned first
    let formatted = "DE12 5001 0517 0648 4898 90";
    let cleaned = clean_iban(formatted);
    println!("\ncleaned '{formatted}' -> '{cleaned}': valid = {}", is_valid(&cleaned));

    // The serializable outcome shape
    let outcome = is_valid_with_result("DE99500105170648489890");
    println!("outcome: {}", serde_json::to_string(&outcome).unwrap());

    // Country metadata
    if let Some(country) = country_data("NO") {
        println!("\nNO: {} ({} characters)", country.name, country.iban_length);
    }
    println!("registry size: {}", countries().len());
}
