//! # KEY SANITIZATION
//!
//! Mechanical cleanup of a key into a conforming one. Independent of the
//! validation engine and of presets: only the caller's raw `specialChars`
//! flags are consulted, and an absent flag means "replace".
//!
//! ## STEPS (fixed order)
//!
//! 1. Delete forbidden characters
//! 2. Collapse runs of `/` into one
//! 3. Drop one trailing `/`
//! 4. Drop one leading `./`
//! 5. Delete every `../`
//! 6. Whitespace runs become `-` unless spaces are allowed
//! 7. `:` becomes `-` unless colons are allowed
//! 8. `@` becomes `-` unless at signs are allowed

use crate::options::{SpecialChar, ValidationOptions};
use crate::validation::charset::is_forbidden;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

static SLASH_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/+").expect("slash run regex"));
static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace run regex"));

const REPLACEMENT: &str = "-";

pub fn sanitize_key(key: &str, options: &ValidationOptions) -> String {
    let allows = |special: SpecialChar| options.special_chars.get(special) == Some(true);

    let mut sanitized: String = key.chars().filter(|c| !is_forbidden(*c)).collect();

    sanitized = SLASH_RUN_RE.replace_all(&sanitized, "/").into_owned();

    if sanitized.ends_with('/') {
        sanitized.pop();
    }

    if let Some(rest) = sanitized.strip_prefix("./") {
        sanitized = rest.to_string();
    }

    sanitized = sanitized.replace("../", "");

    if !allows(SpecialChar::Space) {
        sanitized = WHITESPACE_RUN_RE
            .replace_all(&sanitized, REPLACEMENT)
            .into_owned();
    }

    if !allows(SpecialChar::Colon) {
        sanitized = sanitized.replace(':', REPLACEMENT);
    }

    if !allows(SpecialChar::At) {
        sanitized = sanitized.replace('@', REPLACEMENT);
    }

    trace!("sanitized key {:?} -> {:?}", key, sanitized);
    sanitized
}
