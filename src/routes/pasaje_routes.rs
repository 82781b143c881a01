use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::pasaje_controller::PasajeController;
use crate::dto::pasaje_dto::{
    ActualizarPasajeRequest, ActualizarPasajeResponse, CrearPasajeRequest, CrearPasajeResponse,
    FiltroPasajesQuery, PasajeListadoResponse,
};
use crate::dto::MensajeResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn crear_router_pasajes() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_pasajes))
        .route("/", post(crear_pasaje))
        .route("/:id", put(actualizar_pasaje))
        .route("/:id", delete(eliminar_pasaje))
}

async fn listar_pasajes(
    State(state): State<AppState>,
    Query(consulta): Query<FiltroPasajesQuery>,
) -> AppResult<Json<Vec<PasajeListadoResponse>>> {
    let controller = PasajeController::new(state.pool.clone());
    let pasajes = controller.listar(consulta).await?;
    Ok(Json(pasajes))
}

async fn crear_pasaje(
    State(state): State<AppState>,
    Json(request): Json<CrearPasajeRequest>,
) -> AppResult<(StatusCode, Json<CrearPasajeResponse>)> {
    let controller = PasajeController::new(state.pool.clone());
    let respuesta = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(respuesta)))
}

async fn actualizar_pasaje(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ActualizarPasajeRequest>,
) -> AppResult<Json<ActualizarPasajeResponse>> {
    let controller = PasajeController::new(state.pool.clone());
    let respuesta = controller.actualizar(id, request).await?;
    Ok(Json(respuesta))
}

async fn eliminar_pasaje(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MensajeResponse>> {
    let controller = PasajeController::new(state.pool.clone());
    let mensaje = controller.eliminar(id).await?;
    Ok(Json(mensaje))
}
