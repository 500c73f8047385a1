//  ____  ____                  ____
// |  _ \|  _ \ __ _ ___ ___   / ___| ___ _ __
// | |_) | |_) / _` / __/ __| | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Generation error taxonomy

use std::fmt;

/// Why password generation failed. The first two are recoverable user-input
/// problems; `RandomSourceUnavailable` means the platform has no working
/// cryptographic RNG and retrying is pointless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassGenError {
    NoCharacterClassSelected,
    PoolEmptyAfterExclusion,
    RandomSourceUnavailable,
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::NoCharacterClassSelected => {
                write!(f, "No character types selected.")
            }
            PassGenError::PoolEmptyAfterExclusion => {
                write!(f, "Character set is empty after exclusions.")
            }
            PassGenError::RandomSourceUnavailable => {
                write!(f, "Secure random source is unavailable on this platform.")
            }
        }
    }
}

impl std::error::Error for PassGenError {}
