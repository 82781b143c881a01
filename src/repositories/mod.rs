//! Capa de acceso a datos
//!
//! Un repositorio por tabla, con consultas parametrizadas de sqlx.
//! Los errores de base suben sin traducir; la capa de controladores
//! decide cómo presentarlos.

pub mod pasaje_repository;
pub mod ruta_repository;
pub mod tipo_pasaje_repository;
pub mod unidad_repository;

pub use pasaje_repository::{FiltroPasajes, Pasaje, PasajeEnriquecido, PasajeRepository};
pub use ruta_repository::{Ruta, RutaRepository};
pub use tipo_pasaje_repository::{TipoPasaje, TipoPasajeRepository};
pub use unidad_repository::{Unidad, UnidadRepository};

/// Marcas de estado del borrado lógico.
pub const ESTADO_ACTIVO: &str = "A";
pub const ESTADO_INACTIVO: &str = "I";
