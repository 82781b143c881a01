//! Cálculo de tarifas
//!
//! Este módulo contiene la única autoridad de precios del sistema. La
//! función es pura y determinista: toda mutación de pasajes (alta y
//! actualización) pasa por aquí, nunca por un valor enviado por el cliente.

use rust_decimal::{Decimal, RoundingStrategy};

/// Calcular el valor total de un pasaje.
///
/// `total = precio_base * cantidad_asientos * (1 - porcentaje_descuento / 100)`
///
/// El resultado se redondea a 2 decimales con "mitad lejos de cero", el
/// mismo comportamiento que aplica la columna NUMERIC(10,2) al persistir,
/// así el valor calculado y el almacenado nunca divergen.
///
/// Precondiciones (las valida el flujo de pasajes antes de llamar):
/// `precio_base >= 0`, `cantidad_asientos >= 1`,
/// `0 <= porcentaje_descuento <= 100`.
pub fn calcular_total(
    precio_base: Decimal,
    cantidad_asientos: i32,
    porcentaje_descuento: Decimal,
) -> Decimal {
    let factor = Decimal::ONE - porcentaje_descuento / Decimal::ONE_HUNDRED;
    let bruto = precio_base * Decimal::from(cantidad_asientos);
    (bruto * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
