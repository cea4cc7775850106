use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
}

impl ComponentHealth {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            message: None,
            response_time_ms: Some(response_time_ms),
            last_checked: Utc::now(),
        }
    }

    pub fn degraded(message: String, response_time_ms: u64) -> Self {
        Self {
            status: ComponentStatus::Degraded,
            message: Some(message),
            response_time_ms: Some(response_time_ms),
            last_checked: Utc::now(),
        }
    }

    pub fn unhealthy(error: String) -> Self {
        Self {
            status: ComponentStatus::Unhealthy,
            message: Some(error),
            response_time_ms: None,
            last_checked: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// The overall status is the worst component status.
    pub fn add_component(&mut self, name: &str, health: ComponentHealth) {
        match (&self.status, &health.status) {
            (_, ComponentStatus::Unhealthy) => self.status = ComponentStatus::Unhealthy,
            (ComponentStatus::Healthy, ComponentStatus::Degraded) => {
                self.status = ComponentStatus::Degraded
            }
            _ => {}
        }
        self.components.insert(name.to_string(), health);
    }

    pub fn is_healthy(&self) -> bool {
        self.status != ComponentStatus::Unhealthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_component_wins() {
        let mut response = HealthCheckResponse::new("0.1.0".to_string(), 0);
        response.add_component("a", ComponentHealth::healthy(3));
        assert_eq!(response.status, ComponentStatus::Healthy);

        response.add_component("b", ComponentHealth::degraded("slow".to_string(), 1500));
        assert_eq!(response.status, ComponentStatus::Degraded);
        assert!(response.is_healthy());

        response.add_component("c", ComponentHealth::unhealthy("down".to_string()));
        response.add_component("d", ComponentHealth::degraded("slow".to_string(), 1500));
        assert_eq!(response.status, ComponentStatus::Unhealthy);
        assert!(!response.is_healthy());
    }
}
