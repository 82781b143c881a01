//! Services module
//!
//! Este módulo contiene la lógica de negocio transversal: el cálculo de
//! tarifas (autoridad única de precios) y la exportación del reporte,
//! que envuelve al procedimiento externo de la base.

pub mod reporte_service;
pub mod tarifa_service;

pub use reporte_service::{GeneradorReporte, ReporteCsvService};
pub use tarifa_service::calcular_total;
