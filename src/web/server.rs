use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::geodesy::GeoPoint;

use super::api::look_angle as look_angle_handlers;
use super::api::pressure as pressure_handlers;
use super::api::soundings as sounding_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub station: Option<GeoPoint>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            station: config.station_position(),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/soundings", post(sounding_handlers::build))
        .route("/api/look-angle", post(look_angle_handlers::compute))
        .route("/api/pressure", get(pressure_handlers::standard_atmosphere))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let state = AppState::new(config);

    match (&state.station, &state.config.station) {
        (Some(station), Some(station_config)) => log::info!(
            "Station {} at {:.5},{:.5} ({} m)",
            station_config.name.as_deref().unwrap_or("(unnamed)"),
            station.latitude_deg,
            station.longitude_deg,
            station.altitude_m
        ),
        _ => log::warn!("No station configured, look-angle requests must give an observer"),
    }

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
