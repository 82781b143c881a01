//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos: fechas de filtros, fecha/hora de viaje y
//! rangos numéricos.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a fecha (filtros `dateFrom`/`dateTo`)
pub fn validar_fecha(valor: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(valor, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("fecha");
        error.add_param("value".into(), &valor.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a fecha/hora de viaje.
///
/// El cliente manda el valor de un input `datetime-local`: ISO local con
/// precisión de minutos (`2024-01-15T23:59`). Se acepta también con
/// segundos para clientes que los incluyen.
pub fn validar_fecha_viaje(valor: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            let mut error = ValidationError::new("fecha_viaje");
            error.add_param("value".into(), &valor.to_string());
            error.add_param("format".into(), &"YYYY-MM-DDTHH:MM".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validar_no_vacio(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        let mut error = ValidationError::new("no_vacio");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico (inclusive)
pub fn validar_rango<T: PartialOrd + std::fmt::Display + Serialize>(
    valor: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if valor < min || valor > max {
        let mut error = ValidationError::new("rango");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &valor);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validar_no_negativo<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    valor: T,
) -> Result<(), ValidationError> {
    if valor < T::zero() {
        let mut error = ValidationError::new("no_negativo");
        error.add_param("value".into(), &valor);
        return Err(error);
    }
    Ok(())
}

/// Variante para los derives de `validator` sobre campos `Decimal`
/// (montos y distancias no pueden ser negativos).
pub fn validar_monto_no_negativo(valor: &Decimal) -> Result<(), ValidationError> {
    validar_no_negativo(*valor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_fecha() {
        assert!(validar_fecha("2024-01-15").is_ok());
        assert!(validar_fecha("2024/01/15").is_err());
        assert!(validar_fecha("15-01-2024").is_err());
        assert!(validar_fecha("").is_err());
    }

    #[test]
    fn test_validar_fecha_viaje_precision_minutos() {
        let fecha = validar_fecha_viaje("2024-01-15T23:59").unwrap();
        assert_eq!(fecha.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 23:59:00");
    }

    #[test]
    fn test_validar_fecha_viaje_con_segundos() {
        assert!(validar_fecha_viaje("2024-01-15T23:59:30").is_ok());
    }

    #[test]
    fn test_validar_fecha_viaje_invalida() {
        assert!(validar_fecha_viaje("2024-01-15").is_err());
        assert!(validar_fecha_viaje("ayer a las tres").is_err());
    }

    #[test]
    fn test_validar_no_vacio() {
        assert!(validar_no_vacio("Quito - Guayaquil").is_ok());
        assert!(validar_no_vacio("   ").is_err());
    }

    #[test]
    fn test_validar_rango() {
        assert!(validar_rango(50, 0, 100).is_ok());
        assert!(validar_rango(-1, 0, 100).is_err());
        assert!(validar_rango(101, 0, 100).is_err());
    }

    #[test]
    fn test_validar_no_negativo() {
        assert!(validar_no_negativo(0).is_ok());
        assert!(validar_no_negativo(5).is_ok());
        assert!(validar_no_negativo(-5).is_err());
    }

    #[test]
    fn test_validar_monto_no_negativo() {
        let positivo: Decimal = "12.50".parse().unwrap();
        let negativo: Decimal = "-0.01".parse().unwrap();
        assert!(validar_monto_no_negativo(&positivo).is_ok());
        assert!(validar_monto_no_negativo(&negativo).is_err());
    }
}
