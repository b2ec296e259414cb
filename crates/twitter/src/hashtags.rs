//! Hashtag discovery and camel-case segmentation.
//!
//! A hashtag is `#` followed by one or more ASCII word characters
//! (`A-Z`, `a-z`, `0-9`, `_`). The word is split into human-readable pieces
//! by inserting a space before every uppercase letter that opens a
//! lowercase run:
//!
//! ```text
//! MachineLearning -> " Machine Learning"
//! NASA            -> "NASA"
//! NASAMission     -> "NASA Mission"
//! web3            -> "web3"
//! ```
//!
//! Two substitution strategies are available:
//!
//! - [`segment_hashtags`] rewrites the literal word text everywhere in the
//!   post, then deletes every `#`. This reproduces the historical output of
//!   the preprocessing pipeline and is the default.
//! - [`segment_hashtags_anchored`] splices the segmented word only where a
//!   `#word` token actually occurred and leaves the rest of the post alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("hashtag pattern compiles"));

/// A hashtag found in a post, with the UTF-8 byte span of the whole `#word`
/// token in the scanned text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hashtag {
    /// Word text without the leading `#`.
    pub word: String,
    /// Byte offset (inclusive) of the `#`.
    pub start: usize,
    /// Byte offset (exclusive) of the end of the word.
    pub end: usize,
}

/// Scans `text` left to right and returns every hashtag, duplicates included.
pub fn extract_hashtags(text: &str) -> Vec<Hashtag> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let word = caps.get(1)?;
            Some(Hashtag {
                word: word.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Returns only the hashtag words, in scan order.
pub fn hashtag_words(text: &str) -> Vec<String> {
    extract_hashtags(text).into_iter().map(|tag| tag.word).collect()
}

/// Splits a camel-cased word.
///
/// Each character is looked at together with its successor. An uppercase
/// character followed by a non-uppercase one gets a space in front of it.
/// The last character never does, and neither does an uppercase character
/// followed by another uppercase one, so acronym runs stay intact.
///
/// ```rust
/// use twitter::segment_word;
///
/// assert_eq!(segment_word("MachineLearning"), " Machine Learning");
/// assert_eq!(segment_word("NASA"), "NASA");
/// assert_eq!(segment_word("iPhone"), "i Phone");
/// ```
pub fn segment_word(word: &str) -> String {
    let mut segmented = String::with_capacity(word.len() + word.len() / 2);
    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        let opens_run = ch.is_uppercase() && chars.peek().is_some_and(|next| !next.is_uppercase());
        if opens_run {
            segmented.push(' ');
        }
        segmented.push(ch);
    }
    segmented
}

/// Segments every hashtag and removes all `#` characters.
///
/// For each hashtag word found in the input (in order, duplicates included)
/// every occurrence of that word text anywhere in the current string is
/// replaced by its segmented form. Words that also appear outside a hashtag
/// are therefore segmented there as well, and a repeated hashtag is
/// segmented once per occurrence. Afterwards every `#` in the string is
/// deleted, not only the ones that opened a hashtag.
///
/// ```rust
/// use twitter::segment_hashtags;
///
/// assert_eq!(segment_hashtags("#MachineLearning"), " Machine Learning");
/// assert_eq!(segment_hashtags("#NASA rocks"), "NASA rocks");
/// ```
pub fn segment_hashtags(text: &str) -> String {
    let mut segmented = text.to_string();
    for word in hashtag_words(text) {
        let replacement = segment_word(&word);
        if replacement != word {
            segmented = segmented.replace(word.as_str(), &replacement);
        }
    }
    strip_hash_marks(&segmented)
}

/// Segments hashtags in place, touching only the `#word` spans.
///
/// Each hashtag token is replaced by its segmented word (without the `#`).
/// All other text is copied verbatim, including `#` characters that do not
/// open a hashtag.
///
/// ```rust
/// use twitter::segment_hashtags_anchored;
///
/// assert_eq!(
///     segment_hashtags_anchored("Learning about #MachineLearning"),
///     "Learning about  Machine Learning"
/// );
/// assert_eq!(segment_hashtags_anchored("# of posts"), "# of posts");
/// ```
pub fn segment_hashtags_anchored(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut cursor = 0;
    for tag in extract_hashtags(text) {
        out.push_str(&text[cursor..tag.start]);
        out.push_str(&segment_word(&tag.word));
        cursor = tag.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Deletes every `#` character.
pub fn strip_hash_marks(text: &str) -> String {
    text.replace('#', "")
}
