use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::unidad_controller::UnidadController;
use crate::dto::unidad_dto::{GuardarUnidadRequest, UnidadResponse};
use crate::dto::MensajeResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn crear_router_unidades() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_unidades))
        .route("/", post(crear_unidad))
        .route("/:id", put(actualizar_unidad))
        .route("/:id", delete(eliminar_unidad))
}

async fn listar_unidades(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UnidadResponse>>> {
    let controller = UnidadController::new(state.pool.clone());
    let unidades = controller.listar().await?;
    Ok(Json(unidades))
}

async fn crear_unidad(
    State(state): State<AppState>,
    Json(request): Json<GuardarUnidadRequest>,
) -> AppResult<(StatusCode, Json<MensajeResponse>)> {
    let controller = UnidadController::new(state.pool.clone());
    let mensaje = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(mensaje)))
}

async fn actualizar_unidad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<GuardarUnidadRequest>,
) -> AppResult<Json<MensajeResponse>> {
    let controller = UnidadController::new(state.pool.clone());
    let mensaje = controller.actualizar(id, request).await?;
    Ok(Json(mensaje))
}

async fn eliminar_unidad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MensajeResponse>> {
    let controller = UnidadController::new(state.pool.clone());
    let mensaje = controller.eliminar(id).await?;
    Ok(Json(mensaje))
}
