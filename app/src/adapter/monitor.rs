use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::snapshot::SnapshotRepository;

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorSettings {
    pub interval_seconds: u64,
}

/// Background refresh of the live display: fetches the latest reading on
/// a fixed cadence and logs it. Every fetch is independent and idempotent,
/// so an overlapping or failed fetch only affects its own tick.
pub struct RealtimeMonitor {
    repository: SnapshotRepository,
    interval: Duration,
    cancel: CancellationToken,
}

impl RealtimeMonitor {
    pub fn new(repository: SnapshotRepository, settings: &MonitorSettings) -> Self {
        Self {
            repository,
            interval: Duration::from_secs(settings.interval_seconds),
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::info!("Realtime monitor stopped");
                    break;
                }

                _ = ticker.tick() => {
                    self.refresh().await;
                }
            }
        }
    }

    async fn refresh(&self) {
        match self.repository.latest().await {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    "Latest reading: supply {} -> {}, drain {} -> {}, flow {}, recorded at {:?}",
                    snapshot.temp_supply_in,
                    snapshot.temp_supply_out,
                    snapshot.temp_drain_in,
                    snapshot.temp_drain_out,
                    snapshot.flow,
                    snapshot.recorded_at,
                );
            }
            Ok(None) => {
                tracing::warn!("No sensor reading available");
            }
            Err(e) => {
                tracing::error!("Error fetching latest sensor reading: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancellation_stops_the_monitor() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(100))
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap();
        let repository = SnapshotRepository::new(pool, "test-device".to_string());
        let monitor = RealtimeMonitor::new(repository, &MonitorSettings { interval_seconds: 1 });

        let cancel = monitor.cancellation_token();
        let handle = tokio::spawn(monitor.run());
        cancel.cancel();

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("Monitor did not stop after cancellation")
            .unwrap();
    }
}
