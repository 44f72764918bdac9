//! In-process counters for upstream scheduling API traffic.
//!
//! Each REST client owns one `Metrics`; clones share the same counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    http_requests: AtomicU64,
    http_errors: AtomicU64,
    http_duration_ms: AtomicU64,
    users_listed: AtomicU64,
    event_types_fetched: AtomicU64,
}

/// Metrics collector for upstream API calls.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed HTTP request with its duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.counters.http_requests.fetch_add(1, Ordering::Relaxed);
        self.counters
            .http_duration_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed HTTP request (status error or transport failure).
    pub fn record_http_error(&self) {
        self.counters.http_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record user records returned by an organization listing.
    pub fn record_users_listed(&self, count: usize) {
        self.counters
            .users_listed
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_event_types_fetched(&self, count: usize) {
        self.counters
            .event_types_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Take a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        let requests = self.counters.http_requests.load(Ordering::Relaxed);
        let duration_ms = self.counters.http_duration_ms.load(Ordering::Relaxed);

        MetricsSummary {
            http_requests_total: requests,
            http_errors_total: self.counters.http_errors.load(Ordering::Relaxed),
            http_duration_total_ms: duration_ms,
            http_duration_avg_ms: if requests == 0 {
                0.0
            } else {
                duration_ms as f64 / requests as f64
            },
            users_listed_total: self.counters.users_listed.load(Ordering::Relaxed),
            event_types_fetched_total: self.counters.event_types_fetched.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub users_listed_total: u64,
    pub event_types_fetched_total: u64,
}

/// Times one HTTP request and records it on completion.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
