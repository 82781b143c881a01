//! Catálogo de tipos de pasaje (solo lectura)

use sqlx::PgPool;

use crate::dto::tipo_pasaje_dto::TipoPasajeResponse;
use crate::repositories::TipoPasajeRepository;
use crate::utils::errors::AppError;

pub struct TipoPasajeController {
    repository: TipoPasajeRepository,
}

impl TipoPasajeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TipoPasajeRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<TipoPasajeResponse>, AppError> {
        let tipos = self.repository.listar().await?;

        Ok(tipos.into_iter().map(TipoPasajeResponse::from).collect())
    }
}
