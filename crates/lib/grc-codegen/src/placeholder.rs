use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches `${identifier}` tokens, identifier made of word characters.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$\{\w+\}").expect("Placeholder pattern is valid"));

/// Replaces every placeholder in `template` with `name`.
///
/// The name is inserted literally, so a `$` inside it is never treated as
/// a capture group reference.
pub fn substitute<'t>(template: &'t str, name: &str) -> Cow<'t, str> {
    PLACEHOLDER.replace_all(template, NoExpand(name))
}

#[cfg(test)]
pub fn count(template: &str) -> usize {
    PLACEHOLDER.find_iter(template).count()
}
