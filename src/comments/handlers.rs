use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    comments::{
        dto::{CreateCommentRequest, UpdateCommentRequest},
        repo_types::Comment,
        services,
    },
    error::{log_store_error, ApiError},
    extract::{JsonBody, RecordId},
    listing::ListQuery,
    state::AppState,
};

pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}

#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    q: ListQuery,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let params = q.into_params(&state.config.paging);
    let comments = Comment::list(&state.db, &params)
        .await
        .map_err(|e| log_store_error("list_comments", e))?;
    Ok(Json(comments))
}

#[instrument(skip(state))]
pub async fn get_comment(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Comment>, ApiError> {
    let comment = Comment::find(&state.db, id)
        .await
        .map_err(|e| log_store_error("get_comment", e))?;
    Ok(Json(comment))
}

#[instrument(skip(state, payload))]
pub async fn create_comment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Comment>), ApiError> {
    let new = services::new_comment(payload).map_err(|e| log_store_error("create_comment", e))?;
    let comment = Comment::create(&state.db, &new)
        .await
        .map_err(|e| log_store_error("create_comment", e))?;

    info!(comment_id = comment.id, recipe_id = comment.recipe_id, "comment created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/comments/{}", comment.id))],
        Json(comment),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_comment(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let content =
        services::checked_content(&payload.content).map_err(|e| log_store_error("update_comment", e))?;
    let comment = Comment::update(&state.db, id, &content)
        .await
        .map_err(|e| log_store_error("update_comment", e))?;

    info!(comment_id = comment.id, "comment updated");
    Ok(Json(comment))
}

#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    Comment::soft_delete(&state.db, id)
        .await
        .map_err(|e| log_store_error("delete_comment", e))?;

    info!(comment_id = id, "comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
