//! URL stripping.
//!
//! A URL here is anything that starts with the literal `http` and runs up to
//! the next whitespace character. There is no scheme or host validation:
//! `https://…`, `http://…` and `httpfoo` are all treated the same way.
//!
//! # Examples
//!
//! ```rust
//! use twitter::remove_urls;
//!
//! assert_eq!(remove_urls("check http://x.co now"), "check   now");
//! assert_eq!(remove_urls("no links here"), "no links here");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("url pattern compiles"));

/// Replaces every `http`-prefixed non-whitespace run with a single space.
///
/// Matching is greedy, so `httphttpfoo` is consumed as one run. A bare
/// `http` with nothing after it is left alone.
pub fn remove_urls(text: &str) -> String {
    URL_RE.replace_all(text, " ").into_owned()
}
