//! Configuration types for the preprocessing pipeline.
//!
//! [`PreprocessConfig`] selects which transforms run and how hashtags are
//! rewritten. The transforms themselves take no options.
//!
//! # Versioning
//!
//! `version` is recorded on every [`PreprocessedPost`](crate::PreprocessedPost)
//! so downstream consumers can tell which behavior produced a text. Any
//! change to the output of a transform must come with a version bump.
//!
//! # Examples
//!
//! ```rust
//! use twitter::{HashtagMode, PreprocessConfig};
//!
//! let config = PreprocessConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.strip_urls);
//! assert!(config.strip_mentions);
//! assert!(config.segment_hashtags);
//! assert_eq!(config.hashtag_mode, HashtagMode::Compatible);
//! ```
//!
//! Keeping mentions in the text:
//!
//! ```rust
//! use twitter::PreprocessConfig;
//!
//! let config = PreprocessConfig {
//!     strip_mentions: false,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PreprocessError;

/// How hashtag words are substituted back into the post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HashtagMode {
    /// Replace the word text everywhere in the post, then drop every `#`.
    /// See [`segment_hashtags`](crate::segment_hashtags).
    #[default]
    Compatible,
    /// Splice segmented words only at `#word` spans.
    /// See [`segment_hashtags_anchored`](crate::segment_hashtags_anchored).
    Anchored,
}

/// Configuration for [`preprocess`](crate::preprocess) and
/// [`preprocess_text`](crate::preprocess_text).
///
/// Serialized form:
///
/// ```json
/// {
///   "version": 1,
///   "strip_urls": true,
///   "strip_mentions": true,
///   "segment_hashtags": true,
///   "hashtag_mode": "compatible"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Behavior version. Must be >= 1; version 0 is reserved and rejected.
    pub version: u32,

    /// Replace `http…` runs with a single space.
    pub strip_urls: bool,

    /// Replace `@handle` runs with a single space.
    pub strip_mentions: bool,

    /// Split camel-cased hashtags and drop the `#` marker.
    pub segment_hashtags: bool,

    /// Substitution strategy used when `segment_hashtags` is on.
    #[serde(default)]
    pub hashtag_mode: HashtagMode,
}

impl PreprocessConfig {
    /// Rejects configurations the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), PreprocessError> {
        if self.version == 0 {
            return Err(PreprocessError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PreprocessConfig {
    /// Every transform on, hashtags in [`HashtagMode::Compatible`] mode.
    fn default() -> Self {
        Self {
            version: 1,
            strip_urls: true,
            strip_mentions: true,
            segment_hashtags: true,
            hashtag_mode: HashtagMode::Compatible,
        }
    }
}
