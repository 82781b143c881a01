//! Contratos del API
//!
//! Los requests llegan con claves en minúsculas y los responses salen con
//! las claves en mayúsculas que el cliente heredado espera (herencia de
//! los volcados de filas del sistema anterior). Los campos numéricos de
//! los formularios llegan como texto, así que los ids aceptan número o
//! cadena indistintamente.

pub mod pasaje_dto;
pub mod ruta_dto;
pub mod tipo_pasaje_dto;
pub mod unidad_dto;

use serde::{Deserialize, Deserializer, Serialize};

pub use pasaje_dto::{
    ActualizarPasajeRequest, ActualizarPasajeResponse, CrearPasajeRequest, CrearPasajeResponse,
    FiltroPasajesQuery, PasajeListadoResponse,
};
pub use ruta_dto::{GuardarRutaRequest, RutaResponse};
pub use tipo_pasaje_dto::TipoPasajeResponse;
pub use unidad_dto::{GuardarUnidadRequest, UnidadResponse};

// Response genérica de confirmación
#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub message: String,
}

impl MensajeResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumeroOCadena {
    Numero(i64),
    Cadena(String),
}

/// Acepta `3` o `"3"`; los formularios heredados mandan texto.
pub fn deserializar_id_flexible<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumeroOCadena::deserialize(deserializer)? {
        NumeroOCadena::Numero(n) => Ok(n),
        NumeroOCadena::Cadena(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("id inválido: '{}'", s))),
    }
}

/// Cantidad opcional: acepta número, cadena numérica, cadena vacía
/// (campo del formulario sin tocar) o ausencia del campo.
pub fn deserializar_cantidad_opcional<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumeroOCadena>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumeroOCadena::Numero(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("cantidad fuera de rango: {}", n))),
        Some(NumeroOCadena::Cadena(s)) => {
            let recortada = s.trim();
            if recortada.is_empty() {
                return Ok(None);
            }
            recortada
                .parse::<i32>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("cantidad inválida: '{}'", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct ConId {
        #[serde(deserialize_with = "deserializar_id_flexible")]
        id: i64,
    }

    #[derive(Debug, Deserialize)]
    struct ConCantidad {
        #[serde(default, deserialize_with = "deserializar_cantidad_opcional")]
        cantidad: Option<i32>,
    }

    #[test]
    fn id_acepta_numero_y_cadena() {
        let numerico: ConId = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let texto: ConId = serde_json::from_str(r#"{"id": "7"}"#).unwrap();

        assert_eq!(numerico.id, 7);
        assert_eq!(texto.id, 7);
    }

    #[test]
    fn id_recorta_espacios() {
        let con_espacios: ConId = serde_json::from_str(r#"{"id": " 12 "}"#).unwrap();
        assert_eq!(con_espacios.id, 12);
    }

    #[test]
    fn id_no_numerico_falla() {
        assert!(serde_json::from_str::<ConId>(r#"{"id": "abc"}"#).is_err());
    }

    #[test]
    fn cantidad_ausente_o_vacia_queda_en_none() {
        let ausente: ConCantidad = serde_json::from_str(r#"{}"#).unwrap();
        let vacia: ConCantidad = serde_json::from_str(r#"{"cantidad": ""}"#).unwrap();
        let nula: ConCantidad = serde_json::from_str(r#"{"cantidad": null}"#).unwrap();

        assert_eq!(ausente.cantidad, None);
        assert_eq!(vacia.cantidad, None);
        assert_eq!(nula.cantidad, None);
    }

    #[test]
    fn cantidad_acepta_numero_y_cadena() {
        let numerica: ConCantidad = serde_json::from_str(r#"{"cantidad": 3}"#).unwrap();
        let texto: ConCantidad = serde_json::from_str(r#"{"cantidad": "3"}"#).unwrap();

        assert_eq!(numerica.cantidad, Some(3));
        assert_eq!(texto.cantidad, Some(3));
    }

    #[test]
    fn cantidad_negativa_se_conserva_para_validar_despues() {
        // El rechazo del negativo es decisión del flujo, no del parseo.
        let negativa: ConCantidad = serde_json::from_str(r#"{"cantidad": "-2"}"#).unwrap();
        assert_eq!(negativa.cantidad, Some(-2));
    }
}
