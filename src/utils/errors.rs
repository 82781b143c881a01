//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema y su conversión
//! a respuestas HTTP. El cuerpo de toda respuesta de error es plano:
//! `{"error": "<mensaje>"}`, el contrato que espera el cliente web.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Falla de infraestructura: conectividad o consulta. El repositorio
    /// sube el error de sqlx sin traducir; aquí se vuelve un 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, mensaje) = match self {
            AppError::Database(e) => {
                log::error!("❌ Error de base de datos: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }

            AppError::Validation(e) => {
                log::warn!("⚠️ Datos inválidos: {}", e);
                (StatusCode::BAD_REQUEST, resumir_validacion(&e))
            }

            AppError::NotFound(msg) => {
                log::warn!("⚠️ Recurso no encontrado: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }

            AppError::BadRequest(msg) => {
                log::warn!("⚠️ Solicitud incorrecta: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::Internal(msg) => {
                log::error!("❌ Error interno: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: mensaje })).into_response()
    }
}

/// Aplanar los errores del derive de `validator` a una sola línea legible,
/// usando el mensaje declarado en el DTO cuando existe.
fn resumir_validacion(errores: &validator::ValidationErrors) -> String {
    let campos: Vec<String> = errores
        .field_errors()
        .iter()
        .map(|(campo, detalles)| {
            let motivos: Vec<String> = detalles
                .iter()
                .map(|d| match &d.message {
                    Some(mensaje) => mensaje.to_string(),
                    None => d.code.to_string(),
                })
                .collect();
            format!("{}: {}", campo, motivos.join(", "))
        })
        .collect();

    if campos.is_empty() {
        "Datos inválidos".to_string()
    } else {
        format!("Datos inválidos ({})", campos.join("; "))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resumir_validacion_sin_errores() {
        let errores = validator::ValidationErrors::new();
        assert_eq!(resumir_validacion(&errores), "Datos inválidos");
    }

    #[test]
    fn test_resumir_validacion_con_campo() {
        let mut errores = validator::ValidationErrors::new();
        errores.add("nombre_ruta", validator::ValidationError::new("length"));
        let resumen = resumir_validacion(&errores);
        assert!(resumen.contains("nombre_ruta"));
        assert!(resumen.contains("length"));
    }

    #[test]
    fn test_resumir_validacion_prefiere_el_mensaje() {
        let mut error = validator::ValidationError::new("length");
        error.message = Some("nombre_ruta es obligatorio".into());

        let mut errores = validator::ValidationErrors::new();
        errores.add("nombre_ruta", error);

        let resumen = resumir_validacion(&errores);
        assert!(resumen.contains("nombre_ruta es obligatorio"));
        assert!(!resumen.contains("length"));
    }
}
