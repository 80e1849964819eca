//! Shared server state

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use taskgate_core::api::TaskGateway;

/// Shared by all handlers. Only the stats are mutable.
#[derive(Clone)]
pub struct AppState {
    pub session_id: String,
    pub gateway: Arc<TaskGateway>,
    pub stats: Arc<RwLock<ServerStats>>,
}

impl AppState {
    pub fn new(session_id: String, gateway: TaskGateway) -> Self {
        Self {
            session_id,
            gateway: Arc::new(gateway),
            stats: Arc::new(RwLock::new(ServerStats::new())),
        }
    }

    pub fn record_request(&self, endpoint: &str) {
        if let Ok(mut stats) = self.stats.write() {
            stats.increment_request(endpoint);
        }
    }

    pub fn record_failure(&self, task_id: &str) {
        if let Ok(mut stats) = self.stats.write() {
            stats.failed(task_id);
        }
    }
}

/// Request counters since startup. Keys are registered task ids, `"unknown"` for any other
/// task path, or the path for non-task routes.
pub struct ServerStats {
    pub requests_total: u64,
    pub requests_by_endpoint: HashMap<String, u64>,
    pub errors_total: u64,
    pub errors_by_task: HashMap<String, u64>,
    pub start_time: DateTime<Local>,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            requests_total: 0,
            requests_by_endpoint: HashMap::new(),
            errors_total: 0,
            errors_by_task: HashMap::new(),
            start_time: Local::now(),
        }
    }

    pub fn increment_request(&mut self, endpoint: &str) {
        self.requests_total += 1;
        *self
            .requests_by_endpoint
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    pub fn failed(&mut self, task_id: &str) {
        self.errors_total += 1;
        *self.errors_by_task.entry(task_id.to_string()).or_insert(0) += 1;
    }

    pub fn uptime_seconds(&self) -> f64 {
        let now = Local::now();
        (now - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_stats_new() {
        let stats = ServerStats::new();
        assert_eq!(stats.requests_total, 0);
        assert_eq!(stats.errors_total, 0);
        assert!(stats.uptime_seconds() < 1.0);
    }

    #[test]
    fn test_increment_request_by_task() {
        let mut stats = ServerStats::new();
        stats.increment_request("qa-chatbot");
        stats.increment_request("qa-chatbot");
        stats.increment_request("/health");

        assert_eq!(stats.requests_total, 3);
        assert_eq!(stats.requests_by_endpoint.get("qa-chatbot"), Some(&2));
        assert_eq!(stats.requests_by_endpoint.get("/health"), Some(&1));
    }

    #[test]
    fn test_failures_by_task() {
        let mut stats = ServerStats::new();
        stats.failed("qa-chatbot");
        stats.failed("qa-chatbot");
        stats.failed("horoscope");
        assert_eq!(stats.errors_total, 3);
        assert_eq!(stats.errors_by_task.get("qa-chatbot"), Some(&2));
        assert_eq!(stats.errors_by_task.get("horoscope"), Some(&1));
    }
}
