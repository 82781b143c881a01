//! Administración de unidades

use sqlx::PgPool;
use validator::Validate;

use crate::dto::unidad_dto::{GuardarUnidadRequest, UnidadResponse};
use crate::dto::MensajeResponse;
use crate::repositories::UnidadRepository;
use crate::utils::errors::AppError;

pub struct UnidadController {
    repository: UnidadRepository,
}

impl UnidadController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UnidadRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<UnidadResponse>, AppError> {
        let unidades = self.repository.listar_activas().await?;

        Ok(unidades.into_iter().map(UnidadResponse::from).collect())
    }

    pub async fn crear(&self, request: GuardarUnidadRequest) -> Result<MensajeResponse, AppError> {
        request.validate()?;

        self.repository.crear(&request.nombre_unidad).await?;

        Ok(MensajeResponse::new("Unidad creada exitosamente"))
    }

    pub async fn actualizar(
        &self,
        id: i64,
        request: GuardarUnidadRequest,
    ) -> Result<MensajeResponse, AppError> {
        request.validate()?;

        self.repository
            .actualizar(id, &request.nombre_unidad)
            .await?
            .ok_or_else(|| AppError::NotFound("Unidad no encontrada".to_string()))?;

        Ok(MensajeResponse::new("Unidad actualizada exitosamente"))
    }

    pub async fn eliminar(&self, id: i64) -> Result<MensajeResponse, AppError> {
        let afectadas = self.repository.desactivar(id).await?;

        if afectadas == 0 {
            return Err(AppError::NotFound("Unidad no encontrada".to_string()));
        }

        Ok(MensajeResponse::new("Unidad eliminada exitosamente"))
    }
}
