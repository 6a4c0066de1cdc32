use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod order_lines;
pub mod orders;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/order-lines", order_lines::router())
        .nest("/orders", orders::router())
}
