use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repositories::Ruta;

// Request para crear o actualizar una ruta (mismo cuerpo en ambos casos)
#[derive(Debug, Deserialize, Validate)]
pub struct GuardarRutaRequest {
    #[validate(length(min = 1, max = 100, message = "nombre_ruta es obligatorio"))]
    pub nombre_ruta: String,

    #[validate(length(min = 1, max = 100, message = "origen es obligatorio"))]
    pub origen: String,

    #[validate(length(min = 1, max = 100, message = "destino es obligatorio"))]
    pub destino: String,

    #[validate(custom = "crate::utils::validation::validar_monto_no_negativo")]
    pub distancia_km: Decimal,

    #[validate(custom = "crate::utils::validation::validar_monto_no_negativo")]
    pub precio_base: Decimal,
}

// Response de ruta, con las claves del cliente heredado
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RutaResponse {
    pub id_ruta: i64,
    pub nombre_ruta: String,
    pub origen: String,
    pub destino: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub distancia_km: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio_base: Decimal,
    pub estado: String,
}

impl From<Ruta> for RutaResponse {
    fn from(ruta: Ruta) -> Self {
        Self {
            id_ruta: ruta.id_ruta,
            nombre_ruta: ruta.nombre_ruta,
            origen: ruta.origen,
            destino: ruta.destino,
            distancia_km: ruta.distancia_km,
            precio_base: ruta.precio_base,
            estado: ruta.estado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_usa_claves_en_mayusculas_y_dinero_numerico() {
        let ruta = Ruta {
            id_ruta: 1,
            nombre_ruta: "Quito - Guayaquil".to_string(),
            origen: "Quito".to_string(),
            destino: "Guayaquil".to_string(),
            distancia_km: Decimal::new(42050, 2),
            precio_base: Decimal::new(1250, 2),
            estado: "A".to_string(),
        };

        let json = serde_json::to_value(RutaResponse::from(ruta)).unwrap();

        assert_eq!(json["ID_RUTA"], 1);
        assert_eq!(json["NOMBRE_RUTA"], "Quito - Guayaquil");
        assert_eq!(json["DISTANCIA_KM"], 420.5);
        assert_eq!(json["PRECIO_BASE"], 12.5);
        assert_eq!(json["ESTADO"], "A");
    }

    #[test]
    fn request_acepta_precio_como_cadena() {
        // Los formularios heredados mandan los números como texto.
        let request: GuardarRutaRequest = serde_json::from_str(
            r#"{
                "nombre_ruta": "Quito - Cuenca",
                "origen": "Quito",
                "destino": "Cuenca",
                "distancia_km": "460",
                "precio_base": "15.50"
            }"#,
        )
        .unwrap();

        assert_eq!(request.precio_base, Decimal::new(1550, 2));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_con_nombre_vacio_no_valida() {
        let request: GuardarRutaRequest = serde_json::from_str(
            r#"{
                "nombre_ruta": "",
                "origen": "Quito",
                "destino": "Cuenca",
                "distancia_km": 460,
                "precio_base": 15.5
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn request_con_precio_negativo_no_valida() {
        let request: GuardarRutaRequest = serde_json::from_str(
            r#"{
                "nombre_ruta": "Quito - Cuenca",
                "origen": "Quito",
                "destino": "Cuenca",
                "distancia_km": 460,
                "precio_base": -1
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}
