use crate::configtool::GenDefaults;
use crate::passgen::{self, PasswordOptions};
use crate::strength;

pub fn generate_random(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    exclude_similar: bool,
) -> Result<(), String> {
    let defaults = GenDefaults::load().map_err(|e| format!("Failed to load defaults: {}", e))?;

    // Flags only ever tighten the saved defaults; re-enabling a class is
    // done through the defaults command.
    let options = PasswordOptions {
        length: length.unwrap_or(defaults.length),
        include_uppercase: defaults.uppercase && !no_uppercase,
        include_lowercase: defaults.lowercase && !no_lowercase,
        include_numbers: defaults.numbers && !no_numbers,
        include_symbols: defaults.symbols && !no_symbols,
        exclude_similar: defaults.exclude_similar || exclude_similar,
    };

    let password = passgen::generate_password(&options)
        .map_err(|e| format!("Failed to generate password: {}", e))?;
    println!("Generated random password: {}", password);

    let report = strength::check_strength(&password);
    println!("Password strength: {} (score: {}/8)", report.label, report.score);
    Ok(())
}
