// src/routes/mod.rs
pub mod chat;
pub mod search;
pub mod trips;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use chat::chat_handler;
use search::{search_flights_handler, search_hotels_handler};
use trips::{load_trip_handler, save_trip_handler};

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/trips", post(save_trip_handler))
        .route("/api/trips/{id}", get(load_trip_handler))
        .route("/api/search/flights", post(search_flights_handler))
        .route("/api/search/hotels", post(search_hotels_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
