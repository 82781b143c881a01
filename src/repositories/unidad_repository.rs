//! Acceso a datos de unidades (buses)

use sqlx::PgPool;

/// Fila de la tabla unidades
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Unidad {
    pub id_unidad: i64,
    pub nombre_unidad: String,
    pub estado: String,
}

pub struct UnidadRepository {
    pool: PgPool,
}

impl UnidadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_activas(&self) -> Result<Vec<Unidad>, sqlx::Error> {
        sqlx::query_as::<_, Unidad>(
            "SELECT * FROM unidades WHERE estado = $1 ORDER BY id_unidad ASC",
        )
        .bind(super::ESTADO_ACTIVO)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn crear(&self, nombre_unidad: &str) -> Result<Unidad, sqlx::Error> {
        sqlx::query_as::<_, Unidad>(
            "INSERT INTO unidades (nombre_unidad) VALUES ($1) RETURNING *",
        )
        .bind(nombre_unidad)
        .fetch_one(&self.pool)
        .await
    }

    /// `None` si la unidad no existe.
    pub async fn actualizar(
        &self,
        id: i64,
        nombre_unidad: &str,
    ) -> Result<Option<Unidad>, sqlx::Error> {
        sqlx::query_as::<_, Unidad>(
            "UPDATE unidades SET nombre_unidad = $2 WHERE id_unidad = $1 RETURNING *",
        )
        .bind(id)
        .bind(nombre_unidad)
        .fetch_optional(&self.pool)
        .await
    }

    /// Borrado lógico; devuelve las filas afectadas (0 = no existía).
    pub async fn desactivar(&self, id: i64) -> Result<u64, sqlx::Error> {
        let resultado = sqlx::query("UPDATE unidades SET estado = $2 WHERE id_unidad = $1")
            .bind(id)
            .bind(super::ESTADO_INACTIVO)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }
}
