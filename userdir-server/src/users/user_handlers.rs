use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use userdir_core::{NewUser, User, UserId, UserPatch};

use crate::{
    AppState,
    infra::errors::{AppResult, ErrorBody},
};

/// List every user in insertion order
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "The list of users", body = [User])
    )
)]
#[axum::debug_handler]
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list_users().await)
}

/// Create a new user
///
/// The id is assigned by the server; one supplied in the body is ignored.
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "The user was created", body = String, content_type = "text/plain")
    )
)]
#[axum::debug_handler]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(fields): Json<NewUser>,
) -> String {
    let user = state.users.create_user(fields).await;
    info!(user_id = %user.id, "created user");

    format!("{} has been added to the Database", user.first_name)
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    responses(
        (status = 200, description = "The user with the given id", body = User),
        (status = 404, description = "The user was not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<User>> {
    let user = state.users.get_user(&id).await?;
    Ok(Json(user))
}

/// Update a user by id
///
/// Only fields present with a non-empty value are changed.
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "The user was updated", body = String, content_type = "text/plain"),
        (status = 404, description = "The user was not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(patch): Json<UserPatch>,
) -> AppResult<String> {
    state.users.update_user(&id, patch).await?;
    info!(user_id = %id, "updated user");

    Ok(format!("User with ID {id} has been updated"))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    responses(
        (status = 200, description = "The user was deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "The user was not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<String> {
    state.users.delete_user(&id).await?;
    let remaining = state.users.count().await;
    info!(user_id = %id, remaining, "deleted user");

    Ok(format!("{id} deleted successfully from the database"))
}
