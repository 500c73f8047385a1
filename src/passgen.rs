//  ____  ____                  ____
// |  _ \|  _ \ __ _ ___ ___   / ___| ___ _ __
// | |_) | |_) / _` / __/ __| | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use rand::RngCore;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use crate::error::PassGenError;

// Fixed reference character sets, ASCII only.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters easy to confuse with one another on screen.
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// Per-request generation settings. No persistence, no shared state.
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

/// Assemble the pool of characters eligible for sampling: the union of the
/// selected reference sets, minus the similar-character set when requested.
pub fn build_pool(options: &PasswordOptions) -> Result<Vec<char>, PassGenError> {
    let mut pool: Vec<char> = Vec::new();
    if options.include_uppercase {
        pool.extend(UPPERCASE.chars());
    }
    if options.include_lowercase {
        pool.extend(LOWERCASE.chars());
    }
    if options.include_numbers {
        pool.extend(NUMBERS.chars());
    }
    if options.include_symbols {
        pool.extend(SYMBOLS.chars());
    }

    if pool.is_empty() {
        return Err(PassGenError::NoCharacterClassSelected);
    }

    if options.exclude_similar {
        pool = remove_similar(pool)?;
    }

    Ok(pool)
}

// Each reference set survives the similar-character filter, so the error
// branch is only reachable from a synthetic pool.
fn remove_similar(mut pool: Vec<char>) -> Result<Vec<char>, PassGenError> {
    pool.retain(|c| !SIMILAR_CHARS.contains(*c));
    if pool.is_empty() {
        return Err(PassGenError::PoolEmptyAfterExclusion);
    }
    Ok(pool)
}

/// Draw `length` characters uniformly at random from `pool`, with
/// replacement, using the OS cryptographic RNG. The caller guarantees a
/// non-empty pool via `build_pool`. A zero length yields an empty password.
pub fn sample(pool: &[char], length: usize) -> Result<String, PassGenError> {
    debug_assert!(!pool.is_empty());

    let mut rng = OsRng;
    let mut probe = [0u8; 4];
    rng.try_fill_bytes(&mut probe)
        .map_err(|_| PassGenError::RandomSourceUnavailable)?;

    let indices = Uniform::from(0..pool.len());
    Ok((0..length).map(|_| pool[indices.sample(&mut rng)]).collect())
}

/// Build the pool and sample from it. Pool-construction errors are returned
/// as-is without touching the RNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    let pool = build_pool(options)?;
    sample(&pool, options.length)
}

/// Characters of `password` that belong to the similar-character set.
pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password
        .chars()
        .filter(|c| SIMILAR_CHARS.contains(*c))
        .collect()
}
