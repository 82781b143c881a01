//! Middleware de CORS
//!
//! La política sale de la configuración: sin orígenes declarados se
//! permite cualquiera (el panel se sirve desde el mismo origen en
//! desarrollo); con `CORS_ORIGINS` definido solo se aceptan esos.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::EnvironmentConfig;

pub fn cors_desde_config(config: &EnvironmentConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let origenes: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origen| match HeaderValue::from_str(origen) {
            Ok(valor) => Some(valor),
            Err(_) => {
                log::warn!("⚠️ Origen CORS inválido, se ignora: {}", origen);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origenes))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn config_con(origenes: Vec<String>) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_origins: origenes,
        }
    }

    /// Preflight contra un router mínimo; devuelve el origen que la capa
    /// declaró permitido, si lo hubo.
    async fn origen_permitido(cors: CorsLayer, origen: &str) -> Option<String> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors);

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/")
            .header(header::ORIGIN, origen)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_sin_origenes_declarados_es_permisivo() {
        let cors = cors_desde_config(&config_con(Vec::new()));

        let permitido = origen_permitido(cors, "http://cualquiera.example").await;
        assert_eq!(permitido.as_deref(), Some("http://cualquiera.example"));
    }

    #[tokio::test]
    async fn test_con_origenes_declarados_solo_acepta_esos() {
        let config = config_con(vec![
            "http://panel.example".to_string(),
            "http://admin.example".to_string(),
        ]);

        for declarado in ["http://panel.example", "http://admin.example"] {
            let cors = cors_desde_config(&config);
            let permitido = origen_permitido(cors, declarado).await;
            assert_eq!(permitido.as_deref(), Some(declarado));
        }

        let cors = cors_desde_config(&config);
        let ajeno = origen_permitido(cors, "http://otro.example").await;
        assert_eq!(ajeno, None);
    }
}
