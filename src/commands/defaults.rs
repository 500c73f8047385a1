use crate::configtool::{GenDefaults, defaults_path};

pub fn show_defaults() -> Result<(), String> {
    let defaults = GenDefaults::load().map_err(|e| format!("Failed to load defaults: {}", e))?;
    println!("Saved generation defaults:");
    println!("  length          : {}", defaults.length);
    println!("  uppercase       : {}", defaults.uppercase);
    println!("  lowercase       : {}", defaults.lowercase);
    println!("  numbers         : {}", defaults.numbers);
    println!("  symbols         : {}", defaults.symbols);
    println!("  exclude_similar : {}", defaults.exclude_similar);
    Ok(())
}

pub fn update_defaults(
    length: Option<usize>,
    uppercase: Option<bool>,
    lowercase: Option<bool>,
    numbers: Option<bool>,
    symbols: Option<bool>,
    exclude_similar: Option<bool>,
) -> Result<(), String> {
    let mut defaults = GenDefaults::load().map_err(|e| format!("Failed to load defaults: {}", e))?;

    if let Some(v) = length {
        defaults.length = v;
    }
    if let Some(v) = uppercase {
        defaults.uppercase = v;
    }
    if let Some(v) = lowercase {
        defaults.lowercase = v;
    }
    if let Some(v) = numbers {
        defaults.numbers = v;
    }
    if let Some(v) = symbols {
        defaults.symbols = v;
    }
    if let Some(v) = exclude_similar {
        defaults.exclude_similar = v;
    }

    defaults
        .save()
        .map_err(|e| format!("Failed to save defaults: {}", e))?;
    let path = defaults_path().map_err(|e| format!("Failed to resolve config path: {}", e))?;
    println!("Saved generation defaults to {}", path.display());
    Ok(())
}
