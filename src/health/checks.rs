use super::models::{ComponentHealth, HealthCheckResponse};
use crate::db::ReviewStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    store: Arc<dyn ReviewStore>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let storage_health = timeout(CHECK_TIMEOUT, self.check_storage())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string()));
        response.add_component("storage", storage_health);

        response
    }

    #[tracing::instrument(name = "Check storage health", skip(self))]
    async fn check_storage(&self) -> ComponentHealth {
        let start = Instant::now();

        match self.store.ping().await {
            Ok(()) => {
                let elapsed = start.elapsed().as_millis() as u64;
                if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
                    ComponentHealth::degraded("Storage responding slowly".to_string(), elapsed)
                } else {
                    ComponentHealth::healthy(elapsed)
                }
            }
            Err(err) => {
                tracing::error!("Storage health check failed: {}", err);
                ComponentHealth::unhealthy(err)
            }
        }
    }
}
