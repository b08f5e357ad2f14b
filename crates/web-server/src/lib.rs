use axum::{Router, routing::get};
use database::ShowRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repo: ShowRepository,
}

/// Builds the application router over a repository.
///
/// Kept separate from `run_server` so tests can drive the router directly
/// without binding a socket.
pub fn app(repo: ShowRepository) -> Router {
    let app_state = Arc::new(AppState { repo });

    // Cross-origin requests are permitted from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/genres", get(handlers::get_genres))
        .route("/api/genres/:genre", get(handlers::get_shows_by_genre))
        .route("/api/tvshow/:tvid", get(handlers::get_show))
        .with_state(app_state)
        .layer(cors)
        // This middleware logs every request and response. The span and both
        // events are raised to INFO so the access log is emitted under the
        // default `info` filter.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// The main function to configure and run the web server.
///
/// The database is probed before the listening socket is bound; if the probe
/// fails, the error propagates and the process exits without ever listening.
pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = configuration::load_config()?;

    let pool = database::connect(&config);
    database::probe(&pool).await?;
    let repo = ShowRepository::new(pool, config.genre_match);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Application started, listening on http://{}", addr);

    axum::serve(listener, app(repo)).await?;

    Ok(())
}
