use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{log_store_error, ApiError},
    extract::{JsonBody, RecordId},
    listing::ListQuery,
    state::AppState,
    users::{
        dto::{CreateUserRequest, UpdateUserRequest},
        repo_types::User,
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /users?start=&count=&orderName=&orderType=
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    q: ListQuery,
) -> Result<Json<Vec<User>>, ApiError> {
    let params = q.into_params(&state.config.paging);
    let users = User::list(&state.db, &params)
        .await
        .map_err(|e| log_store_error("list_users", e))?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<User>, ApiError> {
    let user = User::find(&state.db, id)
        .await
        .map_err(|e| log_store_error("get_user", e))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<User>), ApiError> {
    let user = services::create_user(&state.db, &payload)
        .await
        .map_err(|e| log_store_error("create_user", e))?;

    info!(user_id = user.id, "user created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", user.id))],
        Json(user),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = services::update_user(&state.db, id, &payload)
        .await
        .map_err(|e| log_store_error("update_user", e))?;

    info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    User::soft_delete(&state.db, id)
        .await
        .map_err(|e| log_store_error("delete_user", e))?;

    info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
