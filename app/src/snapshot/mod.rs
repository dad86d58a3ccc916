use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::unit::{DegreeCelsius, LitersPerMinute};

/// The most recent telemetry record for the monitored device. Immutable
/// once returned; superseded by the next fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    pub temp_supply_in: DegreeCelsius,
    pub temp_supply_out: DegreeCelsius,
    pub temp_drain_in: DegreeCelsius,
    pub temp_drain_out: DegreeCelsius,
    pub flow: LitersPerMinute,
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, sqlx::FromRow)]
struct SensorReadingRow {
    temp_supply_in: Option<f64>,
    temp_supply_out: Option<f64>,
    temp_drain_in: Option<f64>,
    temp_drain_out: Option<f64>,
    flow: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
}

impl SensorReadingRow {
    // A reading missing any of the five measurements counts as no reading.
    fn into_snapshot(self) -> Option<SensorSnapshot> {
        Some(SensorSnapshot {
            temp_supply_in: DegreeCelsius(self.temp_supply_in?),
            temp_supply_out: DegreeCelsius(self.temp_supply_out?),
            temp_drain_in: DegreeCelsius(self.temp_drain_in?),
            temp_drain_out: DegreeCelsius(self.temp_drain_out?),
            flow: LitersPerMinute(self.flow?),
            recorded_at: self.timestamp,
        })
    }
}

/// Fetches the latest sensor reading for one device. The device identity
/// is injected at construction so a second device only needs a second
/// repository instance.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: PgPool,
    device_id: String,
}

impl SnapshotRepository {
    pub fn new(pool: PgPool, device_id: String) -> Self {
        Self { pool, device_id }
    }

    #[tracing::instrument(skip(self), fields(device_id = %self.device_id))]
    pub async fn latest(&self) -> anyhow::Result<Option<SensorSnapshot>> {
        let row: Option<SensorReadingRow> = sqlx::query_as(
            "SELECT temp_supply_in, temp_supply_out, temp_drain_in, temp_drain_out, flow, timestamp
                FROM SENSOR_READING
                WHERE device = $1
                ORDER BY timestamp DESC
                LIMIT 1",
        )
        .bind(&self.device_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Error fetching latest reading for device {}", self.device_id))?;

        Ok(row.and_then(SensorReadingRow::into_snapshot))
    }
}
