//! Acceso a datos de pasajes
//!
//! Además del CRUD, arma el listado enriquecido (JOIN con rutas, unidades
//! y tipos) con filtros opcionales combinables. El SQL se construye de
//! forma dinámica pero siempre con parámetros numerados, nunca
//! interpolando valores.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Fila de la tabla pasajes
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Pasaje {
    pub id_pasaje: i64,
    pub id_ruta: i64,
    pub id_unidad: i64,
    pub id_tipo: i64,
    pub fecha_viaje: NaiveDateTime,
    pub cantidad_asientos: i32,
    pub valor: Decimal,
}

/// Fila del listado con los nombres ya resueltos.
///
/// Los nombres se resuelven aunque la ruta o la unidad estén desactivadas:
/// el borrado lógico las saca de los catálogos, no del historial.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PasajeEnriquecido {
    pub id_pasaje: i64,
    pub id_ruta: i64,
    pub nombre_ruta: String,
    pub id_unidad: i64,
    pub nombre_unidad: String,
    pub id_tipo: i64,
    pub tipo_pasaje: String,
    pub valor: Decimal,
    pub fecha_viaje: NaiveDateTime,
    pub cantidad_asientos: i32,
}

/// Filtros del listado; todos opcionales y combinables con AND.
#[derive(Debug, Clone, Default)]
pub struct FiltroPasajes {
    pub id_ruta: Option<i64>,
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
}

impl FiltroPasajes {
    pub fn esta_vacio(&self) -> bool {
        self.id_ruta.is_none() && self.fecha_desde.is_none() && self.fecha_hasta.is_none()
    }
}

/// Medianoche del día pedido: el filtro "desde" incluye el día completo.
fn limite_inferior(fecha: NaiveDate) -> NaiveDateTime {
    fecha.and_time(NaiveTime::MIN)
}

/// Medianoche del día siguiente, como cota exclusiva (`<`). Así el filtro
/// "hasta" cubre el día completo incluyendo las horas de la tarde, sin
/// depender de la precisión de la columna.
fn limite_superior_exclusivo(fecha: NaiveDate) -> NaiveDateTime {
    fecha
        .succ_opt()
        .map(|dia| dia.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Arma el SELECT del listado con los placeholders numerados en el mismo
/// orden en que `listar_enriquecidos` hace los bind.
fn construir_sql_listado(filtro: &FiltroPasajes) -> String {
    let mut sql = String::from(
        "SELECT p.id_pasaje, \
                p.id_ruta, r.nombre_ruta, \
                p.id_unidad, u.nombre_unidad, \
                p.id_tipo, t.descripcion AS tipo_pasaje, \
                p.valor, p.fecha_viaje, p.cantidad_asientos \
         FROM pasajes p \
         JOIN rutas r ON p.id_ruta = r.id_ruta \
         JOIN unidades u ON p.id_unidad = u.id_unidad \
         JOIN tipos_pasaje t ON p.id_tipo = t.id_tipo \
         WHERE 1=1",
    );

    let mut n = 0;
    if filtro.id_ruta.is_some() {
        n += 1;
        sql.push_str(&format!(" AND p.id_ruta = ${}", n));
    }
    if filtro.fecha_desde.is_some() {
        n += 1;
        sql.push_str(&format!(" AND p.fecha_viaje >= ${}", n));
    }
    if filtro.fecha_hasta.is_some() {
        n += 1;
        sql.push_str(&format!(" AND p.fecha_viaje < ${}", n));
    }

    sql.push_str(" ORDER BY p.fecha_viaje DESC");
    sql
}

pub struct PasajeRepository {
    pool: PgPool,
}

impl PasajeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta el pasaje y devuelve el id generado.
    pub async fn crear(
        &self,
        id_ruta: i64,
        id_unidad: i64,
        id_tipo: i64,
        fecha_viaje: NaiveDateTime,
        cantidad_asientos: i32,
        valor: Decimal,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO pasajes (id_ruta, id_unidad, id_tipo, fecha_viaje, cantidad_asientos, valor)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_pasaje
            "#,
        )
        .bind(id_ruta)
        .bind(id_unidad)
        .bind(id_tipo)
        .bind(fecha_viaje)
        .bind(cantidad_asientos)
        .bind(valor)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn buscar_por_id(&self, id: i64) -> Result<Option<Pasaje>, sqlx::Error> {
        sqlx::query_as::<_, Pasaje>("SELECT * FROM pasajes WHERE id_pasaje = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Reemplaza referencias, fecha y valor. La cantidad de asientos no
    /// cambia en la actualización; el valor ya viene recalculado con la
    /// cantidad almacenada. Devuelve las filas afectadas (0 = no existía).
    pub async fn actualizar(
        &self,
        id: i64,
        id_ruta: i64,
        id_unidad: i64,
        id_tipo: i64,
        fecha_viaje: NaiveDateTime,
        valor: Decimal,
    ) -> Result<u64, sqlx::Error> {
        let resultado = sqlx::query(
            r#"
            UPDATE pasajes
            SET id_ruta = $2, id_unidad = $3, id_tipo = $4, fecha_viaje = $5, valor = $6
            WHERE id_pasaje = $1
            "#,
        )
        .bind(id)
        .bind(id_ruta)
        .bind(id_unidad)
        .bind(id_tipo)
        .bind(fecha_viaje)
        .bind(valor)
        .execute(&self.pool)
        .await?;

        Ok(resultado.rows_affected())
    }

    /// Borrado físico; devuelve las filas afectadas (0 = no existía).
    pub async fn eliminar(&self, id: i64) -> Result<u64, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM pasajes WHERE id_pasaje = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }

    /// Listado con nombres resueltos, del más reciente al más antiguo.
    pub async fn listar_enriquecidos(
        &self,
        filtro: &FiltroPasajes,
    ) -> Result<Vec<PasajeEnriquecido>, sqlx::Error> {
        let sql = construir_sql_listado(filtro);
        let mut consulta = sqlx::query_as::<_, PasajeEnriquecido>(&sql);

        if let Some(id_ruta) = filtro.id_ruta {
            consulta = consulta.bind(id_ruta);
        }
        if let Some(desde) = filtro.fecha_desde {
            consulta = consulta.bind(limite_inferior(desde));
        }
        if let Some(hasta) = filtro.fecha_hasta {
            consulta = consulta.bind(limite_superior_exclusivo(hasta));
        }

        consulta.fetch_all(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn limite_inferior_es_medianoche() {
        let limite = limite_inferior(fecha(2024, 1, 15));
        assert_eq!(limite.to_string(), "2024-01-15 00:00:00");
    }

    #[test]
    fn limite_superior_cubre_el_dia_completo() {
        // Un viaje a las 23:59 del día filtrado queda dentro; el primer
        // minuto del día siguiente queda fuera.
        let limite = limite_superior_exclusivo(fecha(2024, 1, 15));

        let ultima_hora = fecha(2024, 1, 15).and_hms_opt(23, 59, 0).unwrap();
        let dia_siguiente = fecha(2024, 1, 16).and_hms_opt(0, 1, 0).unwrap();

        assert!(ultima_hora < limite);
        assert!(!(dia_siguiente < limite));
    }

    #[test]
    fn limite_superior_cruza_fin_de_mes() {
        let limite = limite_superior_exclusivo(fecha(2024, 2, 29));
        assert_eq!(limite.to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn sql_sin_filtros_no_agrega_condiciones() {
        let sql = construir_sql_listado(&FiltroPasajes::default());

        assert!(sql.contains("WHERE 1=1 ORDER BY p.fecha_viaje DESC"));
        assert!(!sql.contains("$1"));
    }

    #[test]
    fn sql_con_todos_los_filtros_numera_en_orden() {
        let filtro = FiltroPasajes {
            id_ruta: Some(3),
            fecha_desde: Some(fecha(2024, 1, 1)),
            fecha_hasta: Some(fecha(2024, 1, 31)),
        };
        let sql = construir_sql_listado(&filtro);

        assert!(sql.contains("p.id_ruta = $1"));
        assert!(sql.contains("p.fecha_viaje >= $2"));
        assert!(sql.contains("p.fecha_viaje < $3"));
        assert!(sql.ends_with("ORDER BY p.fecha_viaje DESC"));
    }

    #[test]
    fn sql_con_solo_fecha_hasta_usa_el_primer_placeholder() {
        let filtro = FiltroPasajes {
            fecha_hasta: Some(fecha(2024, 6, 30)),
            ..Default::default()
        };
        let sql = construir_sql_listado(&filtro);

        assert!(sql.contains("p.fecha_viaje < $1"));
        assert!(!sql.contains("$2"));
        assert!(!sql.contains("p.id_ruta ="));
    }

    #[test]
    fn filtro_vacio_se_reconoce() {
        assert!(FiltroPasajes::default().esta_vacio());
        assert!(!FiltroPasajes { id_ruta: Some(1), ..Default::default() }.esta_vacio());
    }
}
