//! Minimal counter registry for the filter.
//!
//! Labels are flattened into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

#[derive(Default)]
pub struct FilterMetrics {
    /// Labels: `outcome` (forward/blocked/error), `shape`, `reason`.
    pub decisions: CounterVec,
}

impl FilterMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.decisions
            .render("jsonrpc_filter_decisions_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_order_does_not_matter() {
        let c = CounterVec::default();
        c.inc(&[("outcome", "forward"), ("shape", "single")]);
        c.inc(&[("shape", "single"), ("outcome", "forward")]);
        assert_eq!(c.get(&[("outcome", "forward"), ("shape", "single")]), 2);
        assert_eq!(c.get(&[("outcome", "blocked"), ("shape", "single")]), 0);
    }

    #[test]
    fn renders_prometheus_text() {
        let m = FilterMetrics::default();
        m.decisions.add(&[("outcome", "blocked"), ("shape", "batch")], 3);
        let text = m.render();
        assert!(text.starts_with("# TYPE jsonrpc_filter_decisions_total counter\n"));
        assert!(text.contains("jsonrpc_filter_decisions_total{outcome=\"blocked\",shape=\"batch\"} 3"));
    }

    #[test]
    fn escapes_label_values() {
        assert_eq!(escape_label("a\"b\\c\n"), "a\\\"b\\\\c\\n");
    }
}
