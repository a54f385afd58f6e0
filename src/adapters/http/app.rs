//! Application router: every endpoint plus the shared middleware stack.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, Router};
use http::{HeaderValue, Request};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::{DocumentExportService, QuestionSource, TabularParser};

use super::assessment::{assessment_router, AssessmentAppState};
use super::frontend::{frontend_router, FrontendAppState};
use super::upload::{upload_router, UploadAppState};

/// Port implementations the routers are built from.
#[derive(Clone)]
pub struct AppServices {
    pub questions: Arc<dyn QuestionSource>,
    pub parser: Arc<dyn TabularParser>,
    pub exporter: Arc<dyn DocumentExportService>,
    pub static_dir: PathBuf,
}

/// Middleware settings derived from [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl From<&ServerConfig> for HttpSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            cors_origins: config.cors_origins_list(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

/// Builds the full application router.
pub fn app_router(services: AppServices, settings: &HttpSettings) -> Router {
    Router::new()
        .merge(assessment_router(AssessmentAppState::new(
            services.questions,
            services.exporter,
        )))
        .merge(upload_router(
            UploadAppState::new(services.parser),
            settings.max_upload_bytes,
        ))
        .merge(frontend_router(FrontendAppState::new(services.static_dir)))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer(&settings.cors_origins))
                .layer(TimeoutLayer::new(settings.request_timeout)),
        )
}

/// Any origin, method and header unless specific origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::document::PdfExportService;
    use crate::adapters::tabular::SpreadsheetParser;
    use crate::application::handlers::assessment::test_support::StaticQuestionSource;

    fn app(settings: &HttpSettings) -> Router {
        app_router(
            AppServices {
                questions: Arc::new(StaticQuestionSource::sample()),
                parser: Arc::new(SpreadsheetParser::new()),
                exporter: Arc::new(PdfExportService::new()),
                static_dir: PathBuf::from("does-not-exist"),
            },
            settings,
        )
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = app(&HttpSettings::default())
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = app(&HttpSettings::default())
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .header("x-request-id", "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-123");
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let response = app(&HttpSettings::default())
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn cors_restricts_to_configured_origins() {
        let settings = HttpSettings {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..HttpSettings::default()
        };
        let response = app(&settings)
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn root_without_assets_returns_welcome() {
        let response = app(&HttpSettings::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn settings_follow_server_config() {
        let config = ServerConfig {
            request_timeout_secs: 12,
            max_upload_bytes: 4096,
            ..ServerConfig::default()
        };
        let settings = HttpSettings::from(&config);
        assert_eq!(settings.request_timeout, Duration::from_secs(12));
        assert_eq!(settings.max_upload_bytes, 4096);
        assert!(settings.cors_origins.is_empty());
    }
}
