//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Las variables se leen
//! una sola vez al arranque y se inyectan como estructura explícita; si
//! algo obligatorio falta o está malformado el proceso no llega a servir.

use anyhow::{anyhow, Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Orígenes CORS permitidos; vacío = permisivo (modo desarrollo)
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Construir la configuración desde el entorno, con defaults para lo
    /// opcional y error temprano para lo malformado.
    pub fn from_env() -> Result<Self> {
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let port = match env::var("PORT") {
            Ok(valor) => valor
                .parse::<u16>()
                .map_err(|_| anyhow!("PORT debe ser un número de puerto válido, no '{valor}'"))?,
            Err(_) => 3000,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(valor) => valor
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => Vec::new(),
        };

        Ok(Self {
            environment,
            port,
            host,
            cors_origins,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leer una variable obligatoria del entorno
pub fn variable_obligatoria(nombre: &str) -> Result<String> {
    env::var(nombre).with_context(|| format!("{nombre} debe estar definida en el entorno"))
}
