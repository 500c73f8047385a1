//  ____  ____                  ____
// |  _ \|  _ \ __ _ ___ ___   / ___| ___ _ __
// | |_) | |_) / _` / __/ __| | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength scoring

use std::fmt;

use crate::passgen::SYMBOLS;

/// Qualitative strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "EMPTY",
            StrengthLabel::Weak => "WEAK",
            StrengthLabel::Medium => "MEDIUM",
            StrengthLabel::Strong => "STRONG",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the 0-8 score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub label: StrengthLabel,
    pub score: u8,
}

/// Score a password with an additive heuristic: up to +3 for length
/// (8/12/16), +1 per character class present, +1 when at least three
/// classes are mixed. Class membership means membership in the fixed
/// reference sets; anything else (whitespace, non-ASCII) counts toward
/// length only. Deterministic, never fails.
pub fn check_strength(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            label: StrengthLabel::Empty,
            score: 0,
        };
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SYMBOLS.contains(c));

    let mut score: u8 = 0;
    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if has_lower {
        score += 1;
    }
    if has_upper {
        score += 1;
    }
    if has_number {
        score += 1;
    }
    if has_symbol {
        score += 1;
    }

    let variety = [has_lower, has_upper, has_number, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();
    if variety >= 3 {
        score += 1;
    }

    let label = if score >= 7 {
        StrengthLabel::Strong
    } else if score >= 4 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Weak
    };

    StrengthReport { label, score }
}
