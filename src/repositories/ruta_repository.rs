//! Acceso a datos de rutas
//!
//! Consultas parametrizadas sobre la tabla `rutas`. Los errores de sqlx
//! suben sin traducir; el controlador decide qué es un 404 y qué un 500.

use rust_decimal::Decimal;
use sqlx::PgPool;

/// Fila de la tabla rutas
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Ruta {
    pub id_ruta: i64,
    pub nombre_ruta: String,
    pub origen: String,
    pub destino: String,
    pub distancia_km: Decimal,
    pub precio_base: Decimal,
    pub estado: String,
}

impl Ruta {
    /// Una ruta desactivada sigue existiendo para los pasajes históricos,
    /// pero no admite pasajes nuevos ni aparece en los listados.
    pub fn esta_activa(&self) -> bool {
        self.estado == super::ESTADO_ACTIVO
    }
}

pub struct RutaRepository {
    pool: PgPool,
}

impl RutaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_activas(&self) -> Result<Vec<Ruta>, sqlx::Error> {
        sqlx::query_as::<_, Ruta>(
            "SELECT * FROM rutas WHERE estado = $1 ORDER BY id_ruta ASC",
        )
        .bind(super::ESTADO_ACTIVO)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn buscar_por_id(&self, id: i64) -> Result<Option<Ruta>, sqlx::Error> {
        sqlx::query_as::<_, Ruta>("SELECT * FROM rutas WHERE id_ruta = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn crear(
        &self,
        nombre_ruta: &str,
        origen: &str,
        destino: &str,
        distancia_km: Decimal,
        precio_base: Decimal,
    ) -> Result<Ruta, sqlx::Error> {
        sqlx::query_as::<_, Ruta>(
            r#"
            INSERT INTO rutas (nombre_ruta, origen, destino, distancia_km, precio_base)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(nombre_ruta)
        .bind(origen)
        .bind(destino)
        .bind(distancia_km)
        .bind(precio_base)
        .fetch_one(&self.pool)
        .await
    }

    /// Actualización completa; `None` si la ruta no existe.
    pub async fn actualizar(
        &self,
        id: i64,
        nombre_ruta: &str,
        origen: &str,
        destino: &str,
        distancia_km: Decimal,
        precio_base: Decimal,
    ) -> Result<Option<Ruta>, sqlx::Error> {
        sqlx::query_as::<_, Ruta>(
            r#"
            UPDATE rutas
            SET nombre_ruta = $2, origen = $3, destino = $4, distancia_km = $5, precio_base = $6
            WHERE id_ruta = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre_ruta)
        .bind(origen)
        .bind(destino)
        .bind(distancia_km)
        .bind(precio_base)
        .fetch_optional(&self.pool)
        .await
    }

    /// Borrado lógico: la fila queda para los pasajes ya emitidos.
    /// Devuelve las filas afectadas (0 = no existía).
    pub async fn desactivar(&self, id: i64) -> Result<u64, sqlx::Error> {
        let resultado = sqlx::query("UPDATE rutas SET estado = $2 WHERE id_ruta = $1")
            .bind(id)
            .bind(super::ESTADO_INACTIVO)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }
}
