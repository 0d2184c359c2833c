//! Process wide counters exposed on `/metrics`.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Room, client and message counters.
///
/// Rendered in the Prometheus text exposition format.
#[derive(Debug, Default)]
pub struct Metrics {
    room_count: AtomicI64,
    client_count: AtomicI64,
    messages_received: AtomicU64,
    messages_broadcasted: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_created(&self) {
        self.room_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn room_removed(&self) {
        self.room_count.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn client_connected(&self) {
        self.client_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn client_disconnected(&self) {
        self.client_count.fetch_sub(1, Ordering::Relaxed);
    }

    /// One envelope accepted for relaying
    pub fn message_received(&self) {
        self.messages_received.fetch_add(1, Ordering::Relaxed);
    }

    /// One envelope handed to one recipient
    pub fn message_broadcasted(&self) {
        self.messages_broadcasted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn room_count(&self) -> i64 {
        self.room_count.load(Ordering::Relaxed)
    }

    pub fn client_count(&self) -> i64 {
        self.client_count.load(Ordering::Relaxed)
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received.load(Ordering::Relaxed)
    }

    pub fn messages_broadcasted(&self) -> u64 {
        self.messages_broadcasted.load(Ordering::Relaxed)
    }

    /// Render all counters in the Prometheus text format
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_metric(
            &mut out,
            "room_count",
            "gauge",
            "The number of active rooms",
            self.room_count().to_string(),
        );
        write_metric(
            &mut out,
            "client_count",
            "gauge",
            "The number of active clients",
            self.client_count().to_string(),
        );
        write_metric(
            &mut out,
            "messages_received",
            "counter",
            "The number of messages received from all connections",
            self.messages_received().to_string(),
        );
        write_metric(
            &mut out,
            "messages_broadcasted",
            "counter",
            "The number of messages broadcasted to all connections",
            self.messages_broadcasted().to_string(),
        );
        out
    }
}

fn write_metric(out: &mut String, name: &str, kind: &str, help: &str, value: String) {
    out.push_str(&format!("# HELP {name} {help}\n"));
    out.push_str(&format!("# TYPE {name} {kind}\n"));
    out.push_str(&format!("{name} {value}\n"));
}
