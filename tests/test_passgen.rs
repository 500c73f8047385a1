use rpassgen::error::PassGenError;
use rpassgen::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password_default_options() {
        let options = PasswordOptions::default();
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 16);

        let union: String = [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS].concat();
        assert!(password.chars().all(|c| union.contains(c)));
    }

    #[test]
    fn test_generate_password_alphanumeric_only() {
        let options = PasswordOptions {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: false,
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_password_no_classes_selected() {
        let options = PasswordOptions {
            length: 16,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar: false,
        };
        let result = generate_password(&options);
        assert_eq!(result, Err(PassGenError::NoCharacterClassSelected));
        assert_eq!(
            result.unwrap_err().to_string(),
            "No character types selected."
        );
    }

    #[test]
    fn test_generate_password_no_classes_ignores_other_fields() {
        for (length, exclude_similar) in [(1, false), (0, true), (64, true)] {
            let options = PasswordOptions {
                length,
                include_uppercase: false,
                include_lowercase: false,
                include_numbers: false,
                include_symbols: false,
                exclude_similar,
            };
            assert_eq!(
                generate_password(&options),
                Err(PassGenError::NoCharacterClassSelected)
            );
        }
    }

    #[test]
    fn test_generate_password_excludes_similar_characters() {
        let options = PasswordOptions {
            length: 64,
            exclude_similar: true,
            ..Default::default()
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 64);
        assert!(password.chars().all(|c| !SIMILAR_CHARS.contains(c)));
    }

    #[test]
    fn test_generate_password_zero_length_is_empty() {
        let options = PasswordOptions {
            length: 0,
            ..Default::default()
        };
        let password = generate_password(&options).unwrap();
        assert!(password.is_empty());
    }

    #[test]
    fn test_build_pool_full_union() {
        let pool = build_pool(&PasswordOptions::default()).unwrap();
        assert_eq!(pool.len(), 26 + 26 + 10 + 32);
    }

    #[test]
    fn test_build_pool_exclusion_removes_seven_characters() {
        let options = PasswordOptions {
            exclude_similar: true,
            ..Default::default()
        };
        let pool = build_pool(&options).unwrap();
        assert_eq!(pool.len(), 26 + 26 + 10 + 32 - SIMILAR_CHARS.len());
        assert!(pool.iter().all(|c| !SIMILAR_CHARS.contains(*c)));
    }

    #[test]
    fn test_build_pool_single_class() {
        let options = PasswordOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
            ..Default::default()
        };
        let pool = build_pool(&options).unwrap();
        assert_eq!(pool, NUMBERS.chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_sample_draws_from_pool_only() {
        let pool: Vec<char> = "ab".chars().collect();
        let drawn = sample(&pool, 100).unwrap();
        assert_eq!(drawn.chars().count(), 100);
        assert!(drawn.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_sample_zero_length() {
        let pool: Vec<char> = "abc".chars().collect();
        assert_eq!(sample(&pool, 0).unwrap(), "");
    }

    #[test]
    fn test_check_confusing_chars() {
        assert_eq!(check_confusing_chars("pass"), Vec::<char>::new());
        assert_eq!(check_confusing_chars("pil0t"), vec!['i', 'l', '0']);
    }
}
