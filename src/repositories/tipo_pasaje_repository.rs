//! Acceso a datos de tipos de pasaje
//!
//! Catálogo de solo lectura: los descuentos se administran directamente
//! en la base (ver `schema.sql`), la API únicamente los consulta.

use rust_decimal::Decimal;
use sqlx::PgPool;

/// Fila de la tabla tipos_pasaje
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TipoPasaje {
    pub id_tipo: i64,
    pub descripcion: String,
    pub porcentaje_descuento: Decimal,
}

pub struct TipoPasajeRepository {
    pool: PgPool,
}

impl TipoPasajeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<TipoPasaje>, sqlx::Error> {
        sqlx::query_as::<_, TipoPasaje>("SELECT * FROM tipos_pasaje ORDER BY id_tipo ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn buscar_por_id(&self, id: i64) -> Result<Option<TipoPasaje>, sqlx::Error> {
        sqlx::query_as::<_, TipoPasaje>("SELECT * FROM tipos_pasaje WHERE id_tipo = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
