use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::ruta_controller::RutaController;
use crate::dto::ruta_dto::{GuardarRutaRequest, RutaResponse};
use crate::dto::MensajeResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn crear_router_rutas() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_rutas))
        .route("/", post(crear_ruta))
        .route("/:id", put(actualizar_ruta))
        .route("/:id", delete(eliminar_ruta))
}

async fn listar_rutas(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RutaResponse>>> {
    let controller = RutaController::new(state.pool.clone());
    let rutas = controller.listar().await?;
    Ok(Json(rutas))
}

async fn crear_ruta(
    State(state): State<AppState>,
    Json(request): Json<GuardarRutaRequest>,
) -> AppResult<(StatusCode, Json<MensajeResponse>)> {
    let controller = RutaController::new(state.pool.clone());
    let mensaje = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(mensaje)))
}

async fn actualizar_ruta(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<GuardarRutaRequest>,
) -> AppResult<Json<MensajeResponse>> {
    let controller = RutaController::new(state.pool.clone());
    let mensaje = controller.actualizar(id, request).await?;
    Ok(Json(mensaje))
}

async fn eliminar_ruta(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MensajeResponse>> {
    let controller = RutaController::new(state.pool.clone());
    let mensaje = controller.eliminar(id).await?;
    Ok(Json(mensaje))
}
