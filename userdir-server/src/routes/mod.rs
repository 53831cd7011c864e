use axum::{Router, routing::get};
use userdir_core::api_routes::{ROOT, users};

use crate::{AppState, api, users::user_handlers};

/// Create the API router; state is supplied by the caller. `port` is
/// advertised as the server in the OpenAPI document.
pub fn create_api_router(port: u16) -> Router<AppState> {
    Router::new()
        .route(ROOT, get(root_handler))
        .route(
            users::COLLECTION,
            get(user_handlers::list_users_handler)
                .post(user_handlers::create_user_handler),
        )
        .route(
            users::ITEM,
            get(user_handlers::get_user_handler)
                .put(user_handlers::update_user_handler)
                .delete(user_handlers::delete_user_handler),
        )
        .merge(api::swagger_ui(port))
}

async fn root_handler() -> &'static str {
    "oops"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::infra::config::Config;

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let config = Config::default();
        let app = create_api_router(config.server.port)
            .with_state(AppState::in_memory(Arc::new(config)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/user/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
