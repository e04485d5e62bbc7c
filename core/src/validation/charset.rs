//! # CHARACTER CLASSIFICATION
//!
//! **PURPOSE**: Places one codepoint into exactly one category.
//! **ORDER**: safe, forbidden, special, language range, additional, invalid.
//! The first matching category wins; `/` for instance is printable but is
//! classified as special, never as anything later in the chain.

use crate::options::{Languages, SpecialChar};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Punctuation that is safe alongside ASCII letters and digits.
pub const SAFE_PUNCTUATION: [char; 8] = ['!', '-', '_', '.', '*', '\'', '(', ')'];

/// Characters rejected under every configuration.
pub const FORBIDDEN_CHARS: [char; 14] = [
    '\\', '{', '}', '^', '%', '`', ']', '"', '>', '[', '~', '<', '#', '|',
];

/// Multi-byte script blocks that language flags can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
    CjkUnified,
    Hangul,
}

const SCRIPT_RANGES: [(Script, RangeInclusive<u32>); 4] = [
    (Script::Hiragana, 0x3040..=0x309F),
    (Script::Katakana, 0x30A0..=0x30FF),
    (Script::CjkUnified, 0x4E00..=0x9FAF),
    (Script::Hangul, 0xAC00..=0xD7AF),
];

impl Script {
    pub fn of(c: char) -> Option<Script> {
        let codepoint = u32::from(c);
        SCRIPT_RANGES
            .iter()
            .find(|(_, range)| range.contains(&codepoint))
            .map(|(script, _)| *script)
    }
}

impl Languages {
    /// `allow_cjk` grants every range. Japanese covers kana and the unified
    /// ideographs, Korean covers hangul, Chinese covers the unified
    /// ideographs.
    pub fn allows(&self, script: Script) -> bool {
        if self.allow_cjk {
            return true;
        }

        match script {
            Script::Hiragana | Script::Katakana => self.allow_japanese,
            Script::CjkUnified => self.allow_japanese || self.allow_chinese,
            Script::Hangul => self.allow_korean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Safe,
    Forbidden,
    Special(SpecialChar),
    Language(Script),
    Additional,
    Invalid,
}

pub fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&c)
}

pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c)
}

/// Space-separated forbidden set for user-facing messages.
pub fn forbidden_list() -> String {
    FORBIDDEN_CHARS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn classify(c: char, additional: &BTreeSet<char>) -> CharClass {
    if is_safe(c) {
        CharClass::Safe
    } else if is_forbidden(c) {
        CharClass::Forbidden
    } else if let Some(special) = SpecialChar::from_char(c) {
        CharClass::Special(special)
    } else if let Some(script) = Script::of(c) {
        CharClass::Language(script)
    } else if additional.contains(&c) {
        CharClass::Additional
    } else {
        CharClass::Invalid
    }
}
