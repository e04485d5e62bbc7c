//! Immutable preset option sets.
//!
//! Presets differ only in which special characters they allow. None of them
//! grants a language range or additional characters.

use super::types::{Languages, ResolvedOptions, SpecialChars, ValidationMode};
use std::collections::BTreeSet;

pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// No special characters at all.
pub static STRICT_PRESET: ResolvedOptions = ResolvedOptions {
    mode: ValidationMode::Strict,
    special_chars: SpecialChars::NONE,
    languages: Languages::NONE,
    additional_chars: BTreeSet::new(),
    max_length: DEFAULT_MAX_LENGTH,
    allow_relative_paths: false,
    allow_dot_prefix: false,
};

/// Slash only. Used when a caller names no mode.
pub static STANDARD_PRESET: ResolvedOptions = ResolvedOptions {
    mode: ValidationMode::Standard,
    special_chars: SpecialChars {
        allow_slash: true,
        ..SpecialChars::NONE
    },
    languages: Languages::NONE,
    additional_chars: BTreeSet::new(),
    max_length: DEFAULT_MAX_LENGTH,
    allow_relative_paths: false,
    allow_dot_prefix: false,
};

/// Every special character, each still flagged with a compatibility warning.
pub static PERMISSIVE_PRESET: ResolvedOptions = ResolvedOptions {
    mode: ValidationMode::Permissive,
    special_chars: SpecialChars::ALL,
    languages: Languages::NONE,
    additional_chars: BTreeSet::new(),
    max_length: DEFAULT_MAX_LENGTH,
    allow_relative_paths: false,
    allow_dot_prefix: false,
};

impl ValidationMode {
    pub fn preset(&self) -> &'static ResolvedOptions {
        match self {
            ValidationMode::Strict => &STRICT_PRESET,
            ValidationMode::Standard => &STANDARD_PRESET,
            ValidationMode::Permissive => &PERMISSIVE_PRESET,
        }
    }
}
