//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.
//! Cada request toma una conexión del pool y la devuelve en todos los
//! caminos de salida; no hay estado compartido entre requests.

use anyhow::{anyhow, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::environment::variable_obligatoria;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Leer la configuración desde el entorno. `DATABASE_URL` es
    /// obligatoria; los límites del pool son opcionales.
    pub fn from_env() -> Result<Self> {
        let url = variable_obligatoria("DATABASE_URL")?;

        Ok(Self {
            url,
            max_connections: variable_numerica("DB_MAX_CONNECTIONS", 10)?,
            min_connections: variable_numerica("DB_MIN_CONNECTIONS", 2)?,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        })
    }

    /// Crear el pool de conexiones. La conexión inicial es inmediata, así
    /// que una base inaccesible se detecta en el arranque.
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

fn variable_numerica(nombre: &str, default: u32) -> Result<u32> {
    match std::env::var(nombre) {
        Ok(valor) => valor
            .parse::<u32>()
            .map_err(|_| anyhow!("{nombre} debe ser un número, no '{valor}'")),
        Err(_) => Ok(default),
    }
}
