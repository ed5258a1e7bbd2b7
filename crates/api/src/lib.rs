mod error;
mod state;
mod util;

pub mod routes;
pub mod services;

pub use error::ApiError;
pub use state::AppState;

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/conversations",
            get(routes::conversations::list_conversations).fallback(method_not_allowed),
        )
        .route(
            "/messages",
            get(routes::messages::list_messages)
                .post(routes::messages::send_message)
                .fallback(method_not_allowed),
        )
        .route(
            "/calls",
            get(routes::calls::list_calls)
                .post(routes::calls::create_call)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(cors_layer())
}

// Unsupported methods on known routes answer with a JSON body instead of
// axum's bare 405.
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(Duration::from_secs(86_400))
}
