//! Request metrics recorded through the `metrics` facade.
//!
//! Nothing is exported by this crate; an embedding process can install a
//! recorder to collect these.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the served request counter.
pub fn inc_http_requests(endpoint: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Route middleware recording count and latency per matched route.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    record_http_latency(start, &endpoint);
    inc_http_requests(&endpoint, response.status().as_u16());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
    use metrics_util::MetricKind;
    use tower::ServiceExt;

    use crate::api::create_router;

    fn get_with_recorder(uri: &str) -> (StatusCode, Snapshotter) {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        let status = metrics::with_local_recorder(&recorder, || {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap()
                .block_on(async {
                    create_router()
                        .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
                        .await
                        .unwrap()
                        .status()
                })
        });

        (status, snapshotter)
    }

    fn label<'a>(key: &'a metrics::Key, name: &str) -> Option<&'a str> {
        key.labels().find(|l| l.key() == name).map(|l| l.value())
    }

    #[test]
    fn matched_route_is_counted_and_timed() {
        let (status, snapshotter) = get_with_recorder("/health");
        assert_eq!(status, StatusCode::OK);

        let recorded = snapshotter.snapshot().into_vec();

        let count = recorded
            .iter()
            .find(|(key, ..)| {
                key.kind() == MetricKind::Counter && key.key().name() == METRIC_HTTP_REQUESTS
            })
            .expect("request counter recorded");
        assert_eq!(label(count.0.key(), "endpoint"), Some("/health"));
        assert_eq!(label(count.0.key(), "status"), Some("200"));
        assert_eq!(count.3, DebugValue::Counter(1));

        let latency = recorded
            .iter()
            .find(|(key, ..)| {
                key.kind() == MetricKind::Histogram
                    && key.key().name() == METRIC_HTTP_REQUEST_LATENCY
            })
            .expect("latency histogram recorded");
        assert_eq!(label(latency.0.key(), "endpoint"), Some("/health"));
        match &latency.3 {
            DebugValue::Histogram(samples) => assert_eq!(samples.len(), 1),
            other => panic!("expected histogram, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_path_records_nothing() {
        let (status, snapshotter) = get_with_recorder("/missing");
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert!(snapshotter.snapshot().into_vec().is_empty());
    }
}
