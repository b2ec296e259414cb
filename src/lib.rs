//! Workspace umbrella crate for social-media post preprocessing.
//!
//! This crate wraps the pure transforms from the `twitter` crate with record
//! handling, structured logging, an optional metrics observer, batch entry
//! points and YAML configuration loading.
//!
//! ```
//! use senti_preprocess::{PostRecord, PreprocessConfig, process_post};
//!
//! let record = PostRecord::new("post-1", "#MachineLearning @bob http://t.co/x");
//! let post = process_post(record, &PreprocessConfig::default()).unwrap();
//! assert_eq!(post.text, " Machine Learning    ");
//! assert_eq!(post.hashtags, vec!["MachineLearning"]);
//! ```

mod config;

pub use crate::config::{ConfigLoadError, PreprocessYamlConfig, SentiConfig};
pub use twitter::{
    Hashtag, HashtagMode, PreprocessConfig, PreprocessError, PreprocessedPost, extract_hashtags,
    hashtag_words, preprocess, preprocess_text, remove_mentions, remove_urls, segment_hashtags,
    segment_hashtags_anchored, segment_word, strip_hash_marks,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, info, warn};

/// Errors that can occur while processing a post record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("preprocessing failure: {0}")]
    Preprocess(#[from] PreprocessError),
}

/// One post as supplied by a batch caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRecord {
    pub id: String,
    pub text: String,
}

impl PostRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Metrics observer for the preprocessing stage.
pub trait PipelineMetrics: Send + Sync {
    fn record_preprocess(&self, latency: Duration, result: Result<(), PipelineError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Preprocess a single record: runs the enabled transforms and logs the outcome.
pub fn process_post(
    record: PostRecord,
    cfg: &PreprocessConfig,
) -> Result<PreprocessedPost, PipelineError> {
    let start = Instant::now();
    let recorder = metrics_recorder();
    let PostRecord { id, text } = record;

    let span = tracing::span!(Level::INFO, "preprocess.post", post_id = %id);
    let _guard = span.enter();

    match preprocess(id, &text, cfg) {
        Ok(post) => {
            let elapsed = start.elapsed();
            info!(
                hashtag_count = post.hashtags.len(),
                input_len = text.len(),
                output_len = post.text.len(),
                version = post.version,
                elapsed_micros = elapsed.as_micros(),
                "preprocess_success"
            );
            if let Some(recorder) = recorder {
                recorder.record_preprocess(elapsed, Ok(()));
            }
            Ok(post)
        }
        Err(err) => {
            let elapsed = start.elapsed();
            let err = PipelineError::from(err);
            warn!(
                error = %err,
                elapsed_micros = elapsed.as_micros(),
                "preprocess_failure"
            );
            if let Some(recorder) = recorder {
                recorder.record_preprocess(elapsed, Err(err.clone()));
            }
            Err(err)
        }
    }
}

/// Preprocess a batch of records. Results come back in input order.
///
/// A failing record does not stop the batch; its error sits at its index.
pub fn process_posts(
    records: Vec<PostRecord>,
    cfg: &PreprocessConfig,
) -> Vec<Result<PreprocessedPost, PipelineError>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records
            .into_par_iter()
            .map(|record| process_post(record, cfg))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records
            .into_iter()
            .map(|record| process_post(record, cfg))
            .collect()
    }
}

/// Preprocess a batch using the settings from a loaded [`SentiConfig`].
pub fn process_posts_with_config(
    records: Vec<PostRecord>,
    config: &SentiConfig,
) -> Vec<Result<PreprocessedPost, PipelineError>> {
    process_posts(records, &config.preprocess_config())
}
