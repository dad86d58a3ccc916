use actix_web::{
    HttpResponse, ResponseError,
    web::{self, Json},
};
use derive_more::derive::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calc::{self, CostComparison, CostKind, Tariff};
use crate::core::format_amount;
use crate::snapshot::{SensorSnapshot, SnapshotRepository};

pub fn new_routes(repository: SnapshotRepository) -> actix_web::Scope {
    web::scope("/api")
        .route("/realtime", web::get().to(get_realtime))
        .route("/calculate", web::post().to(post_calculate))
        .app_data(web::Data::new(repository))
}

type ApiResponse = Result<HttpResponse, ApiError>;

#[derive(Debug, Error, Display)]
enum ApiError {
    #[display("No sensor data available")]
    DataUnavailable,

    #[display("Error accessing sensor data")]
    Upstream(anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::DataUnavailable => tracing::warn!("No sensor data available"),
            ApiError::Upstream(e) => tracing::error!("Error accessing sensor data: {:?}", e),
        }

        // The caller gets the same generic message either way; the two
        // cases stay distinguishable in the logs only.
        HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "sensor data unavailable"
        }))
    }
}

async fn latest_snapshot(repository: &SnapshotRepository) -> Result<SensorSnapshot, ApiError> {
    let maybe_snapshot = repository.latest().await.map_err(ApiError::Upstream)?;
    require_snapshot(maybe_snapshot)
}

fn require_snapshot(snapshot: Option<SensorSnapshot>) -> Result<SensorSnapshot, ApiError> {
    snapshot.ok_or(ApiError::DataUnavailable)
}

async fn get_realtime(repository: web::Data<SnapshotRepository>) -> ApiResponse {
    let snapshot = latest_snapshot(&repository).await?;
    Ok(HttpResponse::Ok().json(RealtimeDto::from(&snapshot)))
}

async fn post_calculate(
    repository: web::Data<SnapshotRepository>,
    Json(request): Json<CalculateRequest>,
) -> ApiResponse {
    tracing::debug!("Received calculation request: {:?}", request);

    // The latest reading is always fetched fresh; client-supplied
    // temperatures or flow are never trusted.
    let snapshot = latest_snapshot(&repository).await?;

    let tariff = Tariff {
        kind: request.cost_type,
        unit_price: request.cost_unit,
        operating_hours_per_day: request.operating_hours,
        operating_days_per_year: request.operating_days,
    };

    let comparison = calc::calculate(&snapshot, &tariff);

    Ok(HttpResponse::Ok().json(CalculateResponse::from(&comparison)))
}

/// The wire shape of `GET /api/realtime`. tempC4 is the drain inlet and
/// tempC3 the drain outlet; the non-sequential numbering is part of the
/// external contract and must not be "fixed".
#[derive(Debug, Serialize)]
struct RealtimeDto {
    temperature: TemperatureDto,
    flow: f64,
}

#[derive(Debug, Serialize)]
struct TemperatureDto {
    #[serde(rename = "tempC1")]
    temp_c1: f64,
    #[serde(rename = "tempC2")]
    temp_c2: f64,
    #[serde(rename = "tempC3")]
    temp_c3: f64,
    #[serde(rename = "tempC4")]
    temp_c4: f64,
}

impl From<&SensorSnapshot> for RealtimeDto {
    fn from(snapshot: &SensorSnapshot) -> Self {
        Self {
            temperature: TemperatureDto {
                temp_c1: snapshot.temp_supply_in.into(),
                temp_c2: snapshot.temp_supply_out.into(),
                temp_c3: snapshot.temp_drain_out.into(),
                temp_c4: snapshot.temp_drain_in.into(),
            },
            flow: snapshot.flow.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    cost_type: CostKind,
    #[serde(default, deserialize_with = "lenient_f64")]
    cost_unit: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    operating_hours: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    operating_days: f64,
}

/// Defaulting policy for the numeric tariff fields: absent, null or
/// malformed values become zero instead of failing the request.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateResponse {
    current_cost: String,
    yearly_cost: String,
    recovery_benefit: String,
    yearly_recovery_benefit: String,
}

impl From<&CostComparison> for CalculateResponse {
    fn from(comparison: &CostComparison) -> Self {
        Self {
            current_cost: format_amount(comparison.current.instantaneous),
            yearly_cost: format_amount(comparison.current.yearly),
            recovery_benefit: format_amount(comparison.recovery_benefit.instantaneous),
            yearly_recovery_benefit: format_amount(comparison.recovery_benefit.yearly),
        }
    }
}
