use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    // Calendar apps and browsers fetch subscriptions cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(controllers::holidays::get_holidays))
        .route("/ical", get(controllers::holidays::get_holidays_ical))
        .route("/health", get(controllers::health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
