use serde::{Deserialize, Serialize};

use crate::config::PreprocessConfig;

/// A post after running the preprocessing pipeline.
///
/// ```text
/// PreprocessedPost
/// ├── post_id: String             # Caller-supplied identifier (trimmed)
/// ├── text: String                # Output of the enabled transforms
/// ├── hashtags: Vec<String>       # Hashtag words the post was tagged with
/// ├── version: u32                # Config version used
/// └── config: PreprocessConfig    # Config snapshot
/// ```
///
/// `hashtags` are collected after URL and mention stripping but before
/// segmentation, so a `#` inside a stripped URL fragment is not reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessedPost {
    pub post_id: String,
    pub text: String,
    pub hashtags: Vec<String>,
    pub version: u32,
    pub config: PreprocessConfig,
}
