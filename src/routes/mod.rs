//! Routers por entidad, anidados bajo `/api` en `lib.rs`

pub mod export_routes;
pub mod pasaje_routes;
pub mod ruta_routes;
pub mod tipo_pasaje_routes;
pub mod unidad_routes;
