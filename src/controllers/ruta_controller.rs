//! Administración de rutas

use sqlx::PgPool;
use validator::Validate;

use crate::dto::ruta_dto::{GuardarRutaRequest, RutaResponse};
use crate::dto::MensajeResponse;
use crate::repositories::RutaRepository;
use crate::utils::errors::AppError;

pub struct RutaController {
    repository: RutaRepository,
}

impl RutaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RutaRepository::new(pool),
        }
    }

    /// Solo rutas activas: las dadas de baja quedan en el historial de
    /// pasajes pero fuera de los catálogos.
    pub async fn listar(&self) -> Result<Vec<RutaResponse>, AppError> {
        let rutas = self.repository.listar_activas().await?;

        Ok(rutas.into_iter().map(RutaResponse::from).collect())
    }

    pub async fn crear(&self, request: GuardarRutaRequest) -> Result<MensajeResponse, AppError> {
        request.validate()?;

        self.repository
            .crear(
                &request.nombre_ruta,
                &request.origen,
                &request.destino,
                request.distancia_km,
                request.precio_base,
            )
            .await?;

        Ok(MensajeResponse::new("Ruta creada exitosamente"))
    }

    pub async fn actualizar(
        &self,
        id: i64,
        request: GuardarRutaRequest,
    ) -> Result<MensajeResponse, AppError> {
        request.validate()?;

        self.repository
            .actualizar(
                id,
                &request.nombre_ruta,
                &request.origen,
                &request.destino,
                request.distancia_km,
                request.precio_base,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        Ok(MensajeResponse::new("Ruta actualizada exitosamente"))
    }

    pub async fn eliminar(&self, id: i64) -> Result<MensajeResponse, AppError> {
        let afectadas = self.repository.desactivar(id).await?;

        if afectadas == 0 {
            return Err(AppError::NotFound("Ruta no encontrada".to_string()));
        }

        Ok(MensajeResponse::new("Ruta eliminada exitosamente"))
    }
}
