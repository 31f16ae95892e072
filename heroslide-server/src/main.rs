mod config;
mod db;
mod models;
mod routes;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::store::list_active_slides,
        routes::admin::list_slides,
        routes::admin::create_slide,
        routes::admin::get_slide,
        routes::admin::update_slide,
        routes::admin::delete_slide,
    ),
    components(schemas(
        models::slide::SlideResponse,
        models::slide::SlidesResponse,
        models::slide::SlideEnvelope,
        models::slide::CreateSlideRequest,
        models::slide::UpdateSlideRequest,
        models::slide::DeleteSlideResponse,
    )),
    tags(
        (name = "Store", description = "Storefront read path (active slides only)"),
        (name = "Admin", description = "Slide management (CRUD)")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("heroslide_server=debug,tower_http=debug")
        .init();

    let config = config::Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let cors = if config.cors_origins == "*" {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(tower_http::cors::Any)
            .allow_credentials(true)
    };

    let state = AppState { db: pool };

    let app = routes::api_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap();
    tracing::info!("Listening on {}", config.listen_addr);
    tracing::info!("Swagger UI at http://{}/docs/", config.listen_addr);
    axum::serve(listener, app).await.unwrap();
}
