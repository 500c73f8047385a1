use crate::passgen;
use crate::strength;

pub fn test_password(password: String, check_confusion: bool) -> Result<(), String> {
    let report = strength::check_strength(&password);
    println!("Password strength: {} (score: {}/8)", report.label, report.score);

    if check_confusion {
        let confusing = passgen::check_confusing_chars(&password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
