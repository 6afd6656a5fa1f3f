pub mod health;
pub mod schools;
pub mod seed;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /schools    GET   filtered, screened, paginated school listing
/// /seed       POST  replace the whole school collection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(schools::router())
        .merge(seed::router())
}
