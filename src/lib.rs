//! Back-office de boletería de buses
//!
//! API administrativa sobre axum + sqlx: rutas, unidades, tipos de
//! pasaje y pasajes, con el reporte CSV delegado a un procedimiento de
//! la base. El router se expone desde la biblioteca para que las
//! pruebas de integración monten exactamente la misma aplicación que
//! el binario.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::AppState;

use middleware::cors::cors_desde_config;

/// Router completo de la aplicación, con sus capas.
pub fn crear_app(state: AppState) -> Router {
    let cors = cors_desde_config(&state.config);

    Router::new()
        .nest("/api/routes", routes::ruta_routes::crear_router_rutas())
        .nest("/api/units", routes::unidad_routes::crear_router_unidades())
        .nest("/api/types", routes::tipo_pasaje_routes::crear_router_tipos())
        .nest("/api/tickets", routes::pasaje_routes::crear_router_pasajes())
        .nest("/api/export", routes::export_routes::crear_router_export())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
