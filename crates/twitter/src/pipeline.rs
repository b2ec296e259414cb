use std::borrow::Cow;

use crate::config::{HashtagMode, PreprocessConfig};
use crate::document::PreprocessedPost;
use crate::error::PreprocessError;
use crate::hashtags::{hashtag_words, segment_hashtags, segment_hashtags_anchored};
use crate::mentions::remove_mentions;
use crate::urls::remove_urls;

/// Runs the enabled transforms over a single post and wraps the result.
pub fn preprocess(
    post_id: impl Into<String>,
    input: &str,
    cfg: &PreprocessConfig,
) -> Result<PreprocessedPost, PreprocessError> {
    cfg.validate()?;

    let post_id: String = post_id.into();
    let trimmed = post_id.trim();
    if trimmed.is_empty() {
        return Err(PreprocessError::MissingPostId);
    }
    let post_id = if post_id.len() == trimmed.len() {
        post_id
    } else {
        trimmed.to_string()
    };

    let stripped = strip_handles(input, cfg);
    let hashtags = hashtag_words(&stripped);
    let text = apply_hashtags(stripped, cfg).into_owned();

    Ok(PreprocessedPost {
        post_id,
        text,
        hashtags,
        version: cfg.version,
        config: cfg.clone(),
    })
}

/// Runs the enabled transforms and returns only the resulting text.
///
/// Stages run in a fixed order: URLs, then mentions, then hashtags.
pub fn preprocess_text(input: &str, cfg: &PreprocessConfig) -> Result<String, PreprocessError> {
    cfg.validate()?;
    let stripped = strip_handles(input, cfg);
    Ok(apply_hashtags(stripped, cfg).into_owned())
}

/// URL and mention stages. Borrows when both are disabled.
fn strip_handles<'a>(input: &'a str, cfg: &PreprocessConfig) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(input);
    if cfg.strip_urls {
        text = Cow::Owned(remove_urls(&text));
    }
    if cfg.strip_mentions {
        text = Cow::Owned(remove_mentions(&text));
    }
    text
}

fn apply_hashtags<'a>(text: Cow<'a, str>, cfg: &PreprocessConfig) -> Cow<'a, str> {
    if !cfg.segment_hashtags {
        return text;
    }
    match cfg.hashtag_mode {
        HashtagMode::Compatible => Cow::Owned(segment_hashtags(&text)),
        HashtagMode::Anchored => Cow::Owned(segment_hashtags_anchored(&text)),
    }
}
