mod clock;
mod config;
mod error;
mod generator;
mod model;
mod routes;
mod session;
mod state;
mod utils;
mod validation;

use axum::routing::{get, patch, post};
use axum::{serve, Router};
use clock::SystemClock;
use config::Config;
use dotenvy::dotenv;
use generator::RngSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use routes::{add_entry, click_link, health, list_entries, list_links, shorten, update_entry};
use session::ShortenerSession;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_TRACING_LEVEL: &str = "link_session=debug";

#[tokio::main]
async fn main() {
    _ = dotenv();
    configure_tracing();
    let config = Config::load();
    let session = ShortenerSession::new(
        Box::new(SystemClock),
        Box::new(RngSource(StdRng::from_entropy())),
    );
    let state = AppState::new(session, &config.short_url_prefix);
    let listener = create_listener(&config.server_address).await;
    serve(listener, create_router(state))
        .await
        .expect("Server failed to start");
}

fn configure_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or(DEFAULT_TRACING_LEVEL.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn create_listener(server_address: &str) -> TcpListener {
    let listener = TcpListener::bind(&server_address)
        .await
        .expect("Creating tcp listener failed");
    tracing::info!("Listening on address: {}", server_address);
    listener
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(list_entries).post(add_entry))
        .route("/entries/:index", patch(update_entry))
        .route("/shorten", post(shorten))
        .route("/links", get(list_links))
        .route("/links/:index/click", post(click_link))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
