use crate::errors::{error_codes, ProjectError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Named preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Strict,
    #[default]
    Standard,
    Permissive,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Strict => "strict",
            ValidationMode::Standard => "standard",
            ValidationMode::Permissive => "permissive",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = ProjectError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.to_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "standard" => Ok(ValidationMode::Standard),
            "permissive" => Ok(ValidationMode::Permissive),
            _ => Err(ProjectError::Config {
                code: error_codes::INVALID_MODE.to_string(),
                message: format!("Invalid validation mode: {}", mode),
            }),
        }
    }
}

/// The six individually toggleable special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialChar {
    Slash,
    Colon,
    Space,
    At,
    Ampersand,
    Dollar,
}

impl SpecialChar {
    pub const ALL: [SpecialChar; 6] = [
        SpecialChar::Slash,
        SpecialChar::Colon,
        SpecialChar::Space,
        SpecialChar::At,
        SpecialChar::Ampersand,
        SpecialChar::Dollar,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '/' => Some(SpecialChar::Slash),
            ':' => Some(SpecialChar::Colon),
            ' ' => Some(SpecialChar::Space),
            '@' => Some(SpecialChar::At),
            '&' => Some(SpecialChar::Ampersand),
            '$' => Some(SpecialChar::Dollar),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            SpecialChar::Slash => '/',
            SpecialChar::Colon => ':',
            SpecialChar::Space => ' ',
            SpecialChar::At => '@',
            SpecialChar::Ampersand => '&',
            SpecialChar::Dollar => '$',
        }
    }
}

/// Language allowance flags as named in options documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    Korean,
    Chinese,
    Cjk,
}

/// **PARTIAL SPECIAL-CHARACTER OVERRIDES**
///
/// `None` means "inherit from the preset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCharsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_slash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_colon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_space: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_at: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_ampersand: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dollar: Option<bool>,
}

impl SpecialCharsOverride {
    pub fn get(&self, special: SpecialChar) -> Option<bool> {
        match special {
            SpecialChar::Slash => self.allow_slash,
            SpecialChar::Colon => self.allow_colon,
            SpecialChar::Space => self.allow_space,
            SpecialChar::At => self.allow_at,
            SpecialChar::Ampersand => self.allow_ampersand,
            SpecialChar::Dollar => self.allow_dollar,
        }
    }

    fn slot(&mut self, special: SpecialChar) -> &mut Option<bool> {
        match special {
            SpecialChar::Slash => &mut self.allow_slash,
            SpecialChar::Colon => &mut self.allow_colon,
            SpecialChar::Space => &mut self.allow_space,
            SpecialChar::At => &mut self.allow_at,
            SpecialChar::Ampersand => &mut self.allow_ampersand,
            SpecialChar::Dollar => &mut self.allow_dollar,
        }
    }
}

/// **PARTIAL LANGUAGE OVERRIDES**
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_japanese: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_korean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_chinese: Option<bool>,
    #[serde(default, rename = "allowCJK", skip_serializing_if = "Option::is_none")]
    pub allow_cjk: Option<bool>,
}

impl LanguagesOverride {
    fn slot(&mut self, language: Language) -> &mut Option<bool> {
        match language {
            Language::Japanese => &mut self.allow_japanese,
            Language::Korean => &mut self.allow_korean,
            Language::Chinese => &mut self.allow_chinese,
            Language::Cjk => &mut self.allow_cjk,
        }
    }
}

/// **RAW PER-CALL OPTIONS**
///
/// **PURPOSE**: What a caller supplies. Every field is optional; the
/// resolver fills the gaps from a preset.
///
/// ```
/// use s3key::options::{ValidationMode, ValidationOptions, SpecialChar};
///
/// let options = ValidationOptions::new()
///     .with_mode(ValidationMode::Strict)
///     .allow_special(SpecialChar::Slash, true);
/// assert_eq!(options.special_chars.allow_slash, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ValidationMode>,
    #[serde(default)]
    pub special_chars: SpecialCharsOverride,
    #[serde(default)]
    pub languages: LanguagesOverride,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_chars: Option<BTreeSet<char>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_relative_paths: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dot_prefix: Option<bool>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// **LOAD FROM JSON** - Field names follow the camelCase document form
    /// (`specialChars.allowSlash`, `maxLength`, ...).
    pub fn from_json_str(document: &str) -> Result<Self, ProjectError> {
        serde_json::from_str(document).map_err(|e| ProjectError::Config {
            code: error_codes::INVALID_OPTIONS.to_string(),
            message: format!("Invalid options document: {}", e),
        })
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn allow_special(mut self, special: SpecialChar, allow: bool) -> Self {
        *self.special_chars.slot(special) = Some(allow);
        self
    }

    pub fn allow_language(mut self, language: Language, allow: bool) -> Self {
        *self.languages.slot(language) = Some(allow);
        self
    }

    pub fn with_additional_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.additional_chars = Some(chars.into_iter().collect());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn allow_relative_paths(mut self, allow: bool) -> Self {
        self.allow_relative_paths = Some(allow);
        self
    }

    pub fn allow_dot_prefix(mut self, allow: bool) -> Self {
        self.allow_dot_prefix = Some(allow);
        self
    }
}

/// **RESOLVED SPECIAL-CHARACTER ALLOWANCES**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialChars {
    pub allow_slash: bool,
    pub allow_colon: bool,
    pub allow_space: bool,
    pub allow_at: bool,
    pub allow_ampersand: bool,
    pub allow_dollar: bool,
}

impl SpecialChars {
    pub const NONE: SpecialChars = SpecialChars {
        allow_slash: false,
        allow_colon: false,
        allow_space: false,
        allow_at: false,
        allow_ampersand: false,
        allow_dollar: false,
    };

    pub const ALL: SpecialChars = SpecialChars {
        allow_slash: true,
        allow_colon: true,
        allow_space: true,
        allow_at: true,
        allow_ampersand: true,
        allow_dollar: true,
    };

    pub fn allows(&self, special: SpecialChar) -> bool {
        match special {
            SpecialChar::Slash => self.allow_slash,
            SpecialChar::Colon => self.allow_colon,
            SpecialChar::Space => self.allow_space,
            SpecialChar::At => self.allow_at,
            SpecialChar::Ampersand => self.allow_ampersand,
            SpecialChar::Dollar => self.allow_dollar,
        }
    }
}

/// **RESOLVED LANGUAGE ALLOWANCES**
///
/// Flags are independent; `allow_cjk` covers every script range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Languages {
    pub allow_japanese: bool,
    pub allow_korean: bool,
    pub allow_chinese: bool,
    #[serde(rename = "allowCJK")]
    pub allow_cjk: bool,
}

impl Languages {
    pub const NONE: Languages = Languages {
        allow_japanese: false,
        allow_korean: false,
        allow_chinese: false,
        allow_cjk: false,
    };
}

/// **FULLY RESOLVED OPTIONS**
///
/// **GUARANTEE**: Every field carries an effective value; this is the only
/// shape the checkers ever see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub mode: ValidationMode,
    pub special_chars: SpecialChars,
    pub languages: Languages,
    pub additional_chars: BTreeSet<char>,
    pub max_length: usize,
    pub allow_relative_paths: bool,
    pub allow_dot_prefix: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ValidationMode::Standard.preset().clone()
    }
}
