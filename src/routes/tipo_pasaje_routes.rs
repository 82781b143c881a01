use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::tipo_pasaje_controller::TipoPasajeController;
use crate::dto::tipo_pasaje_dto::TipoPasajeResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn crear_router_tipos() -> Router<AppState> {
    Router::new().route("/", get(listar_tipos))
}

async fn listar_tipos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TipoPasajeResponse>>> {
    let controller = TipoPasajeController::new(state.pool.clone());
    let tipos = controller.listar().await?;
    Ok(Json(tipos))
}
