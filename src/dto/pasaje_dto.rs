use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{deserializar_cantidad_opcional, deserializar_id_flexible};
use crate::repositories::PasajeEnriquecido;

// Request para crear un pasaje. El valor no se recibe: lo calcula el
// servidor a partir de la ruta y el tipo.
#[derive(Debug, Deserialize)]
pub struct CrearPasajeRequest {
    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_ruta: i64,

    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_unidad: i64,

    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_tipo: i64,

    // "YYYY-MM-DDTHH:MM", como lo emite un input datetime-local
    pub fecha_viaje: String,

    #[serde(default, deserialize_with = "deserializar_cantidad_opcional")]
    pub cantidad_asientos: Option<i32>,
}

// Request para actualizar un pasaje. El cliente heredado manda el valor
// que tiene en pantalla; se acepta para no romperlo, pero el total se
// recalcula siempre en el servidor.
#[derive(Debug, Deserialize)]
pub struct ActualizarPasajeRequest {
    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_ruta: i64,

    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_unidad: i64,

    #[serde(deserialize_with = "deserializar_id_flexible")]
    pub id_tipo: i64,

    pub fecha_viaje: String,

    #[serde(default)]
    pub valor: Option<Decimal>,
}

// Query params del listado; llegan en camelCase y siempre como texto.
// La conversión a tipos se hace en el flujo, para responder 400 con un
// mensaje claro en lugar del rechazo genérico del extractor.
#[derive(Debug, Default, Deserialize)]
pub struct FiltroPasajesQuery {
    #[serde(rename = "routeId")]
    pub route_id: Option<String>,

    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,

    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
}

// Confirmación de creación, con el total calculado y el id generado
#[derive(Debug, Serialize)]
pub struct CrearPasajeResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub id_pasaje: i64,
}

// Confirmación de actualización, con el total recalculado
#[derive(Debug, Serialize)]
pub struct ActualizarPasajeResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

// Fila del listado, con los nombres resueltos y las claves del cliente
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PasajeListadoResponse {
    pub id_pasaje: i64,
    pub id_ruta: i64,
    pub nombre_ruta: String,
    pub id_unidad: i64,
    pub nombre_unidad: String,
    pub id_tipo: i64,
    pub tipo_pasaje: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub fecha_viaje: NaiveDateTime,
    pub cantidad_asientos: i32,
}

impl From<PasajeEnriquecido> for PasajeListadoResponse {
    fn from(pasaje: PasajeEnriquecido) -> Self {
        Self {
            id_pasaje: pasaje.id_pasaje,
            id_ruta: pasaje.id_ruta,
            nombre_ruta: pasaje.nombre_ruta,
            id_unidad: pasaje.id_unidad,
            nombre_unidad: pasaje.nombre_unidad,
            id_tipo: pasaje.id_tipo,
            tipo_pasaje: pasaje.tipo_pasaje,
            valor: pasaje.valor,
            fecha_viaje: pasaje.fecha_viaje,
            cantidad_asientos: pasaje.cantidad_asientos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn creacion_acepta_el_formato_del_formulario_heredado() {
        // Ids como texto, sin cantidad, y un "valor" extra que se ignora.
        let request: CrearPasajeRequest = serde_json::from_str(
            r#"{
                "id_ruta": "1",
                "id_unidad": "2",
                "id_tipo": "3",
                "fecha_viaje": "2024-01-15T14:30",
                "valor": "12.50"
            }"#,
        )
        .unwrap();

        assert_eq!(request.id_ruta, 1);
        assert_eq!(request.id_unidad, 2);
        assert_eq!(request.id_tipo, 3);
        assert_eq!(request.fecha_viaje, "2024-01-15T14:30");
        assert_eq!(request.cantidad_asientos, None);
    }

    #[test]
    fn creacion_acepta_ids_numericos() {
        let request: CrearPasajeRequest = serde_json::from_str(
            r#"{
                "id_ruta": 1,
                "id_unidad": 2,
                "id_tipo": 3,
                "fecha_viaje": "2024-01-15T14:30",
                "cantidad_asientos": 4
            }"#,
        )
        .unwrap();

        assert_eq!(request.cantidad_asientos, Some(4));
    }

    #[test]
    fn actualizacion_acepta_valor_como_cadena() {
        let request: ActualizarPasajeRequest = serde_json::from_str(
            r#"{
                "id_ruta": "1",
                "id_unidad": "2",
                "id_tipo": "3",
                "fecha_viaje": "2024-01-15T14:30",
                "valor": "99.99"
            }"#,
        )
        .unwrap();

        assert_eq!(request.valor, Some(Decimal::new(9999, 2)));
    }

    #[test]
    fn listado_serializa_claves_y_tipos_del_cliente() {
        let fila = PasajeEnriquecido {
            id_pasaje: 10,
            id_ruta: 1,
            nombre_ruta: "Quito - Guayaquil".to_string(),
            id_unidad: 2,
            nombre_unidad: "Bus 101".to_string(),
            id_tipo: 3,
            tipo_pasaje: "Estudiante".to_string(),
            valor: Decimal::new(1875, 2),
            fecha_viaje: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            cantidad_asientos: 3,
        };

        let json = serde_json::to_value(PasajeListadoResponse::from(fila)).unwrap();

        assert_eq!(json["ID_PASAJE"], 10);
        assert_eq!(json["NOMBRE_RUTA"], "Quito - Guayaquil");
        assert_eq!(json["TIPO_PASAJE"], "Estudiante");
        // El cliente hace VALOR.toFixed(2): tiene que ser número JSON.
        assert_eq!(json["VALOR"], 18.75);
        // Y new Date(FECHA_VIAJE): ISO local sin zona.
        assert_eq!(json["FECHA_VIAJE"], "2024-01-15T14:30:00");
    }

    #[test]
    fn filtros_llegan_en_camel_case() {
        let consulta: FiltroPasajesQuery =
            serde_json::from_str(r#"{"routeId": "3", "dateFrom": "2024-01-01"}"#).unwrap();

        assert_eq!(consulta.route_id.as_deref(), Some("3"));
        assert_eq!(consulta.date_from.as_deref(), Some("2024-01-01"));
        assert_eq!(consulta.date_to, None);
    }

    #[test]
    fn confirmaciones_usan_claves_en_minusculas() {
        let creado = CrearPasajeResponse {
            message: "Ticket created successfully".to_string(),
            total: Decimal::new(10000, 2),
            id_pasaje: 7,
        };

        let json = serde_json::to_value(creado).unwrap();

        assert_eq!(json["message"], "Ticket created successfully");
        assert_eq!(json["total"], 100.0);
        assert_eq!(json["id_pasaje"], 7);
    }
}
