//! Route table

use crate::auth::require_identity;
use crate::handlers::{checklists, health, items, shared, sharing, users};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;
use listo_core::{Error, Result};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// CORS policy for the given origins; no origins allows any
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                Error::configuration(format!("invalid CORS origin '{origin}': {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(origins))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let authenticated = Router::new()
        // checklists
        .route("/checklists", get(checklists::list))
        .route("/checklist", post(checklists::create))
        .route(
            "/checklist/:id",
            get(checklists::get)
                .put(checklists::update)
                .delete(checklists::delete),
        )
        // items
        .route("/checklist/:id/item", post(items::create))
        .route("/checklist/:id/items", put(items::set_all_checked))
        .route(
            "/checklist/:id/item/:item_id",
            put(items::update).delete(items::delete),
        )
        // sharing
        .route("/checklist/:id/share", get(sharing::issue))
        .route("/checklist/share/:code", post(sharing::redeem))
        // shared checklists
        .route("/checklists/shared", get(shared::list))
        .route("/checklist/:id/shared", get(shared::get).put(shared::update))
        .route("/checklist/:id/shared/user", delete(shared::leave))
        // shared items
        .route("/checklist/:id/shared/item", post(shared::create_item))
        .route("/checklist/:id/shared/items", put(shared::set_all_checked))
        .route(
            "/checklist/:id/shared/item/:item_id",
            put(shared::update_item).delete(shared::delete_item),
        )
        // users
        .route("/user", post(users::upsert))
        .route_layer(from_fn_with_state(state.clone(), require_identity));

    Router::new()
        .route("/", get(health))
        .merge(authenticated)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins() {
        assert!(cors_layer(&[]).is_ok());
        assert!(cors_layer(&["https://listo.app".to_string()]).is_ok());
        assert!(matches!(
            cors_layer(&["bad\norigin".to_string()]),
            Err(Error::Configuration { .. })
        ));
    }
}
