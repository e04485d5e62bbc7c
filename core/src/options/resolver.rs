use super::types::{
    Languages, LanguagesOverride, ResolvedOptions, SpecialChars, SpecialCharsOverride,
    ValidationOptions,
};

/// **OPTIONS RESOLUTION**
///
/// Starts from the preset named by `raw.mode` (standard when unset) and
/// overlays every field the caller supplied. `special_chars` and `languages`
/// merge per flag, so overriding one flag never resets its siblings.
pub fn resolve_options(raw: &ValidationOptions) -> ResolvedOptions {
    let preset = raw.mode.unwrap_or_default().preset();

    ResolvedOptions {
        mode: preset.mode,
        special_chars: preset.special_chars.overlay(&raw.special_chars),
        languages: preset.languages.overlay(&raw.languages),
        additional_chars: raw
            .additional_chars
            .clone()
            .unwrap_or_else(|| preset.additional_chars.clone()),
        max_length: raw.max_length.unwrap_or(preset.max_length),
        allow_relative_paths: raw
            .allow_relative_paths
            .unwrap_or(preset.allow_relative_paths),
        allow_dot_prefix: raw.allow_dot_prefix.unwrap_or(preset.allow_dot_prefix),
    }
}

impl SpecialChars {
    fn overlay(self, overrides: &SpecialCharsOverride) -> Self {
        Self {
            allow_slash: overrides.allow_slash.unwrap_or(self.allow_slash),
            allow_colon: overrides.allow_colon.unwrap_or(self.allow_colon),
            allow_space: overrides.allow_space.unwrap_or(self.allow_space),
            allow_at: overrides.allow_at.unwrap_or(self.allow_at),
            allow_ampersand: overrides.allow_ampersand.unwrap_or(self.allow_ampersand),
            allow_dollar: overrides.allow_dollar.unwrap_or(self.allow_dollar),
        }
    }
}

impl Languages {
    fn overlay(self, overrides: &LanguagesOverride) -> Self {
        Self {
            allow_japanese: overrides.allow_japanese.unwrap_or(self.allow_japanese),
            allow_korean: overrides.allow_korean.unwrap_or(self.allow_korean),
            allow_chinese: overrides.allow_chinese.unwrap_or(self.allow_chinese),
            allow_cjk: overrides.allow_cjk.unwrap_or(self.allow_cjk),
        }
    }
}

impl From<&ValidationOptions> for ResolvedOptions {
    fn from(raw: &ValidationOptions) -> Self {
        resolve_options(raw)
    }
}
