//! Social-media post normalization.
//!
//! Three independent transforms for post text, each a pure `&str -> String`
//! function:
//!
//! - [`remove_urls`] replaces `http…` runs with a single space
//! - [`remove_mentions`] replaces `@handle` runs with a single space
//! - [`segment_hashtags`] splits camel-cased hashtags and drops `#`
//!
//! They can be called in any order. [`preprocess`] and [`preprocess_text`]
//! compose them according to a [`PreprocessConfig`].
//!
//! ## Pure function guarantee
//!
//! No I/O, no global mutable state, no locale dependence. The compiled
//! patterns are immutable statics, so every function can be called from any
//! number of threads at once.
//!
//! ```rust
//! use twitter::{remove_mentions, remove_urls, segment_hashtags};
//!
//! let post = "Loving #MachineLearning with @openai http://t.co/xyz";
//! let clean = segment_hashtags(&remove_mentions(&remove_urls(post)));
//! assert_eq!(clean, "Loving  Machine Learning with    ");
//! ```

mod config;
mod document;
mod error;
mod hashtags;
mod mentions;
mod pipeline;
mod urls;

pub use crate::config::{HashtagMode, PreprocessConfig};
pub use crate::document::PreprocessedPost;
pub use crate::error::PreprocessError;
pub use crate::hashtags::{
    extract_hashtags, hashtag_words, segment_hashtags, segment_hashtags_anchored, segment_word,
    strip_hash_marks, Hashtag,
};
pub use crate::mentions::remove_mentions;
pub use crate::pipeline::{preprocess, preprocess_text};
pub use crate::urls::remove_urls;
