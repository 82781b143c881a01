use rust_decimal::Decimal;
use serde::Serialize;

use crate::repositories::TipoPasaje;

// Response de tipo de pasaje (catálogo de solo lectura)
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TipoPasajeResponse {
    pub id_tipo: i64,
    pub descripcion: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub porcentaje_descuento: Decimal,
}

impl From<TipoPasaje> for TipoPasajeResponse {
    fn from(tipo: TipoPasaje) -> Self {
        Self {
            id_tipo: tipo.id_tipo,
            descripcion: tipo.descripcion,
            porcentaje_descuento: tipo.porcentaje_descuento,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descuento_sale_como_numero() {
        let tipo = TipoPasaje {
            id_tipo: 2,
            descripcion: "Estudiante".to_string(),
            porcentaje_descuento: Decimal::new(5000, 2),
        };

        let json = serde_json::to_value(TipoPasajeResponse::from(tipo)).unwrap();

        assert_eq!(json["ID_TIPO"], 2);
        assert_eq!(json["DESCRIPCION"], "Estudiante");
        assert_eq!(json["PORCENTAJE_DESCUENTO"], 50.0);
    }
}
