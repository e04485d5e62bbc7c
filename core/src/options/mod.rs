pub mod presets;
pub mod resolver;
pub mod types;

pub use presets::{DEFAULT_MAX_LENGTH, PERMISSIVE_PRESET, STANDARD_PRESET, STRICT_PRESET};
pub use resolver::resolve_options;
pub use types::{
    Language, Languages, LanguagesOverride, ResolvedOptions, SpecialChar, SpecialChars,
    SpecialCharsOverride, ValidationMode, ValidationOptions,
};
