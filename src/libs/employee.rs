//! Employee identity normalization.
//!
//! The two exports spell the same person differently: the OA log pads CJK
//! names with plain and full-width spaces, while the HR register appends a
//! Latin transliteration after the CJK name. Both are reduced to the bare
//! name so records join on a single key.

use regex::Regex;
use std::sync::OnceLock;

/// Normalizes an OA attendance name.
///
/// Names containing any non-Latin character get every plain and
/// full-width space stripped; pure-Latin names pass through unchanged
/// (spaces there are meaningful separators).
pub fn normalize_oa_name(raw: &str) -> String {
    static NON_LATIN: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let non_latin = NON_LATIN.get_or_init(|| Regex::new(r"[^A-Za-z ]").unwrap());
    let spaces = SPACES.get_or_init(|| Regex::new(r"[\u{3000} ]+").unwrap());

    if non_latin.is_match(raw) {
        spaces.replace_all(raw, "").into_owned()
    } else {
        raw.to_string()
    }
}

/// Normalizes an HR register name.
///
/// Keeps the leading run of non-Latin characters when one exists (the
/// register writes "张三 Zhang San"); otherwise the name is used as-is.
pub fn normalize_hr_name(raw: &str) -> String {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let leading = LEADING.get_or_init(|| Regex::new(r"^([^A-Za-z ]+)").unwrap());

    match leading.captures(raw) {
        Some(captures) => captures[1].to_string(),
        None => raw.to_string(),
    }
}
