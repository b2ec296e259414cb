use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use senti_preprocess::{
    PipelineError, PipelineMetrics, PostRecord, PreprocessConfig, process_post,
    set_pipeline_metrics,
};

#[derive(Default)]
struct CountingMetrics {
    ok: AtomicUsize,
    failed: AtomicUsize,
}

impl PipelineMetrics for CountingMetrics {
    fn record_preprocess(&self, _latency: Duration, result: Result<(), PipelineError>) {
        match result {
            Ok(()) => self.ok.fetch_add(1, Ordering::SeqCst),
            Err(_) => self.failed.fetch_add(1, Ordering::SeqCst),
        };
    }
}

#[test]
fn recorder_sees_successes_and_failures() {
    let metrics = Arc::new(CountingMetrics::default());
    let recorder: Arc<dyn PipelineMetrics> = metrics.clone();
    set_pipeline_metrics(Some(recorder));

    let cfg = PreprocessConfig::default();
    process_post(PostRecord::new("ok-1", "#One"), &cfg).expect("ok");
    process_post(PostRecord::new("ok-2", "two"), &cfg).expect("ok");
    process_post(PostRecord::new("", "three"), &cfg).expect_err("missing id");

    set_pipeline_metrics(None);
    process_post(PostRecord::new("ok-3", "unrecorded"), &cfg).expect("ok");

    assert_eq!(metrics.ok.load(Ordering::SeqCst), 2);
    assert_eq!(metrics.failed.load(Ordering::SeqCst), 1);
}
