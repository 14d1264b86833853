//! String utility functions

use once_cell::sync::Lazy;
use regex::Regex;

static COLOR_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?col(=[0-9a-fA-F]{6})?>").expect("color tag regex is valid"));

/// Remove in-game color tags such as `<col=ff9040>` and `</col>`
pub fn remove_color_tags(text: &str) -> String {
    COLOR_TAG_RE.replace_all(text, "").into_owned()
}
