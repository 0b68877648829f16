//! In-memory CRUD service for items, categories, and cars with nested tasks.
//!
//! `app()` builds a router over freshly seeded stores; `app_with_state()`
//! lets tests keep a handle on the [`AppState`] to inspect or reset it.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validate;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{AppError, Message};
pub use state::AppState;
pub use store::{Car, Category, Item, Task};

pub fn app() -> Router {
    app_with_state(AppState::new())
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .nest("/items", routes::items::router())
        .nest("/categories", routes::categories::router())
        .nest("/cars", routes::cars::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
