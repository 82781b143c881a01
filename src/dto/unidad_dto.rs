use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repositories::Unidad;

// Request para crear o actualizar una unidad
#[derive(Debug, Deserialize, Validate)]
pub struct GuardarUnidadRequest {
    #[validate(length(min = 1, max = 100, message = "nombre_unidad es obligatorio"))]
    pub nombre_unidad: String,
}

// Response de unidad, con las claves del cliente heredado
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UnidadResponse {
    pub id_unidad: i64,
    pub nombre_unidad: String,
    pub estado: String,
}

impl From<Unidad> for UnidadResponse {
    fn from(unidad: Unidad) -> Self {
        Self {
            id_unidad: unidad.id_unidad,
            nombre_unidad: unidad.nombre_unidad,
            estado: unidad.estado,
        }
    }
}
