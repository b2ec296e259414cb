use std::io::Write;

use senti_preprocess::{
    HashtagMode, PipelineError, PostRecord, PreprocessConfig, PreprocessError, SentiConfig,
    process_post, process_posts, process_posts_with_config,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn single_post_end_to_end() {
    init_tracing();
    let record = PostRecord::new(
        "post-42",
        "Huge win for #OpenSource today! via @github https://github.blog/x",
    );

    let post = process_post(record, &PreprocessConfig::default()).expect("post processed");

    assert_eq!(post.post_id, "post-42");
    assert_eq!(post.text, "Huge win for  Open Source today! via    ");
    assert_eq!(post.hashtags, vec!["OpenSource"]);
    assert_eq!(post.version, 1);
}

#[test]
fn missing_id_surfaces_as_pipeline_error() {
    init_tracing();
    let result = process_post(PostRecord::new("  ", "text"), &PreprocessConfig::default());
    assert_eq!(
        result,
        Err(PipelineError::Preprocess(PreprocessError::MissingPostId))
    );
}

#[test]
fn invalid_config_surfaces_as_pipeline_error() {
    let cfg = PreprocessConfig {
        version: 0,
        ..Default::default()
    };
    let result = process_post(PostRecord::new("p", "text"), &cfg);
    assert!(matches!(
        result,
        Err(PipelineError::Preprocess(PreprocessError::InvalidConfig(_)))
    ));
}

#[test]
fn batch_keeps_input_order_and_isolates_failures() {
    init_tracing();
    let records = vec![
        PostRecord::new("a", "#FirstPost"),
        PostRecord::new("", "no id"),
        PostRecord::new("c", "@someone hi"),
    ];

    let results = process_posts(records, &PreprocessConfig::default());

    assert_eq!(results.len(), 3);
    let first = results[0].as_ref().expect("first ok");
    assert_eq!(first.post_id, "a");
    assert_eq!(first.text, " First Post");
    assert!(matches!(
        results[1],
        Err(PipelineError::Preprocess(PreprocessError::MissingPostId))
    ));
    let third = results[2].as_ref().expect("third ok");
    assert_eq!(third.text, "  hi");
}

#[test]
fn batch_driven_by_yaml_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "version: \"1.0\"\npreprocess:\n  strip_urls: false\n  hashtag_mode: anchored"
    )
    .expect("write config");

    let config = SentiConfig::from_file(file.path()).expect("config loads");
    let cfg = config.preprocess_config();
    assert!(!cfg.strip_urls);
    assert_eq!(cfg.hashtag_mode, HashtagMode::Anchored);

    let results = process_posts_with_config(
        vec![PostRecord::new("p1", "BigData #BigData http://x.co")],
        &config,
    );
    let post = results[0].as_ref().expect("processed");
    assert_eq!(post.text, "BigData  Big Data http://x.co");
}

#[test]
fn missing_config_file_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let res = SentiConfig::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(
        res,
        Err(senti_preprocess::ConfigLoadError::FileRead(_))
    ));
}

#[test]
fn record_serializes_hash_in_text() {
    let record = PostRecord::new("p", "#Tag");
    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(json, r##"{"id":"p","text":"#Tag"}"##);
}
