use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::services::{GeneradorReporte, ReporteCsvService};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn crear_router_export() -> Router<AppState> {
    Router::new().route("/", get(exportar_csv))
}

/// Transmite el CSV del procedimiento de reporte línea a línea, sin
/// cargar el reporte completo en memoria.
async fn exportar_csv(State(state): State<AppState>) -> AppResult<Response> {
    let servicio = ReporteCsvService::new(state.pool.clone());
    let flujo = servicio.generar_csv().await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"reporte_pasajes.csv\"",
        )
        .body(Body::from_stream(flujo))
        .map_err(|e| AppError::Internal(format!("No se pudo armar la respuesta: {}", e)))
}
