//! Text normalization applied before polarity scoring.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").expect("alphanumeric pattern compiles"));

/// Collapse whitespace runs to one space, drop everything outside
/// `[A-Za-z0-9 ]`, then lowercase.
pub fn preprocess_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let stripped = NON_ALPHANUMERIC.replace_all(&collapsed, "");
    stripped.to_lowercase()
}
