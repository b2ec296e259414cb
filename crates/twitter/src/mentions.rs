use once_cell::sync::Lazy;
use regex::Regex;

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9]+").expect("mention pattern compiles"));

/// Replaces every `@handle` with a single space.
///
/// Only ASCII letters and digits belong to a handle. Anything else
/// (underscores, accented letters, punctuation) ends the match and stays in
/// the output, so `"@user_name"` becomes `" _name"`. A lone `@` is untouched.
pub fn remove_mentions(text: &str) -> String {
    MENTION_RE.replace_all(text, " ").into_owned()
}
