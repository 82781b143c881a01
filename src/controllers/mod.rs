//! Capa de orquestación
//!
//! Cada controlador posee sus repositorios y traduce ausencias a
//! `NotFound`; las reglas del negocio (cálculo del total, normalización
//! de cantidades, ventanas de fechas) viven aquí y en `services`.

pub mod pasaje_controller;
pub mod ruta_controller;
pub mod tipo_pasaje_controller;
pub mod unidad_controller;

pub use pasaje_controller::PasajeController;
pub use ruta_controller::RutaController;
pub use tipo_pasaje_controller::TipoPasajeController;
pub use unidad_controller::UnidadController;
