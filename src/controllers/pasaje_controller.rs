//! Flujo de emisión de pasajes
//!
//! Orquesta las operaciones sobre pasajes: valida la entrada, resuelve
//! ruta y tipo contra la base, calcula el total en el servidor y
//! persiste. El valor de un pasaje nunca viene del cliente.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::pasaje_dto::{
    ActualizarPasajeRequest, ActualizarPasajeResponse, CrearPasajeRequest, CrearPasajeResponse,
    FiltroPasajesQuery, PasajeListadoResponse,
};
use crate::dto::MensajeResponse;
use crate::repositories::{FiltroPasajes, PasajeRepository, RutaRepository, TipoPasajeRepository};
use crate::services::tarifa_service;
use crate::utils::errors::AppError;
use crate::utils::validation::{validar_fecha, validar_fecha_viaje, validar_rango};

/// Asientos asumidos cuando el formulario no manda la cantidad.
const ASIENTOS_POR_OMISION: i32 = 1;

pub struct PasajeController {
    pasajes: PasajeRepository,
    rutas: RutaRepository,
    tipos: TipoPasajeRepository,
}

impl PasajeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pasajes: PasajeRepository::new(pool.clone()),
            rutas: RutaRepository::new(pool.clone()),
            tipos: TipoPasajeRepository::new(pool),
        }
    }

    pub async fn listar(
        &self,
        consulta: FiltroPasajesQuery,
    ) -> Result<Vec<PasajeListadoResponse>, AppError> {
        let filtro = convertir_filtro(&consulta)?;
        let pasajes = self.pasajes.listar_enriquecidos(&filtro).await?;

        Ok(pasajes.into_iter().map(PasajeListadoResponse::from).collect())
    }

    pub async fn crear(
        &self,
        request: CrearPasajeRequest,
    ) -> Result<CrearPasajeResponse, AppError> {
        // La fecha llega como texto del formulario; se valida antes de
        // tocar la base.
        let fecha_viaje = validar_fecha_viaje(&request.fecha_viaje).map_err(|_| {
            AppError::BadRequest(format!("fecha_viaje inválida: '{}'", request.fecha_viaje))
        })?;
        let cantidad_asientos = normalizar_cantidad_asientos(request.cantidad_asientos)?;

        // 1. Precio base de la ruta
        let ruta = self
            .rutas
            .buscar_por_id(request.id_ruta)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        // No se emiten pasajes nuevos contra rutas dadas de baja.
        if !ruta.esta_activa() {
            return Err(AppError::NotFound("Ruta no encontrada o inactiva".to_string()));
        }

        // 2. Descuento del tipo de pasaje
        let tipo = self
            .tipos
            .buscar_por_id(request.id_tipo)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de pasaje no encontrado".to_string()))?;

        validar_descuento(tipo.porcentaje_descuento)?;

        // 3. Total calculado en el servidor
        let total = tarifa_service::calcular_total(
            ruta.precio_base,
            cantidad_asientos,
            tipo.porcentaje_descuento,
        );

        let id_pasaje = self
            .pasajes
            .crear(
                request.id_ruta,
                request.id_unidad,
                request.id_tipo,
                fecha_viaje,
                cantidad_asientos,
                total,
            )
            .await?;

        log::info!(
            "🎫 Pasaje {} emitido: ruta {}, {} asiento(s), total {}",
            id_pasaje,
            request.id_ruta,
            cantidad_asientos,
            total
        );

        Ok(CrearPasajeResponse {
            message: "Ticket created successfully".to_string(),
            total,
            id_pasaje,
        })
    }

    /// El total se recalcula siempre con el estado vigente de ruta y
    /// tipo, sobre la cantidad de asientos ya almacenada. La ruta puede
    /// estar inactiva: los pasajes históricos siguen siendo editables.
    pub async fn actualizar(
        &self,
        id: i64,
        request: ActualizarPasajeRequest,
    ) -> Result<ActualizarPasajeResponse, AppError> {
        let fecha_viaje = validar_fecha_viaje(&request.fecha_viaje).map_err(|_| {
            AppError::BadRequest(format!("fecha_viaje inválida: '{}'", request.fecha_viaje))
        })?;

        let pasaje = self
            .pasajes
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pasaje no encontrado".to_string()))?;

        let ruta = self
            .rutas
            .buscar_por_id(request.id_ruta)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        let tipo = self
            .tipos
            .buscar_por_id(request.id_tipo)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de pasaje no encontrado".to_string()))?;

        validar_descuento(tipo.porcentaje_descuento)?;

        if request.valor.is_some() {
            log::warn!(
                "⚠️ Valor del cliente ignorado en el pasaje {}; el total se recalcula",
                id
            );
        }

        let total = tarifa_service::calcular_total(
            ruta.precio_base,
            pasaje.cantidad_asientos,
            tipo.porcentaje_descuento,
        );

        let afectadas = self
            .pasajes
            .actualizar(
                id,
                request.id_ruta,
                request.id_unidad,
                request.id_tipo,
                fecha_viaje,
                total,
            )
            .await?;

        // Pudo desaparecer entre la consulta y el UPDATE.
        if afectadas == 0 {
            return Err(AppError::NotFound("Pasaje no encontrado".to_string()));
        }

        Ok(ActualizarPasajeResponse {
            message: "Pasaje actualizado correctamente".to_string(),
            total,
        })
    }

    pub async fn eliminar(&self, id: i64) -> Result<MensajeResponse, AppError> {
        let afectadas = self.pasajes.eliminar(id).await?;

        if afectadas == 0 {
            return Err(AppError::NotFound("Pasaje no encontrado".to_string()));
        }

        Ok(MensajeResponse::new("Ticket deleted"))
    }
}

/// Sin cantidad (o cero, el valor de un formulario sin tocar) se asume
/// un asiento. Una cantidad negativa explícita es un error del cliente.
fn normalizar_cantidad_asientos(cantidad: Option<i32>) -> Result<i32, AppError> {
    match cantidad {
        None | Some(0) => Ok(ASIENTOS_POR_OMISION),
        Some(n) if n < 0 => Err(AppError::BadRequest(format!(
            "cantidad_asientos debe ser positiva (se recibió {})",
            n
        ))),
        Some(n) => Ok(n),
    }
}

/// El descuento sale de la base con un CHECK 0..100; el guardia cubre
/// bases pobladas por fuera del esquema.
fn validar_descuento(porcentaje: Decimal) -> Result<(), AppError> {
    validar_rango(porcentaje, Decimal::ZERO, Decimal::ONE_HUNDRED).map_err(|_| {
        AppError::BadRequest(format!("Porcentaje de descuento fuera de rango: {}", porcentaje))
    })
}

fn convertir_filtro(consulta: &FiltroPasajesQuery) -> Result<FiltroPasajes, AppError> {
    let id_ruta = match consulta.route_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(valor) => Some(
            valor
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("routeId inválido: '{}'", valor)))?,
        ),
    };

    Ok(FiltroPasajes {
        id_ruta,
        fecha_desde: convertir_fecha(consulta.date_from.as_deref(), "dateFrom")?,
        fecha_hasta: convertir_fecha(consulta.date_to.as_deref(), "dateTo")?,
    })
}

fn convertir_fecha(valor: Option<&str>, parametro: &str) -> Result<Option<NaiveDate>, AppError> {
    match valor.map(str::trim) {
        None | Some("") => Ok(None),
        Some(texto) => validar_fecha(texto).map(Some).map_err(|_| {
            AppError::BadRequest(format!(
                "{} inválido: '{}' (se espera YYYY-MM-DD)",
                parametro, texto
            ))
        }),
    }
}
