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
    recipes::{
        dto::{CreateRecipeRequest, UpdateRecipeRequest},
        repo_types::Recipe,
        services,
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    q: ListQuery,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let params = q.into_params(&state.config.paging);
    let recipes = Recipe::list(&state.db, &params)
        .await
        .map_err(|e| log_store_error("list_recipes", e))?;
    Ok(Json(recipes))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = Recipe::find(&state.db, id)
        .await
        .map_err(|e| log_store_error("get_recipe", e))?;
    Ok(Json(recipe))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateRecipeRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Recipe>), ApiError> {
    let new = services::new_recipe(payload).map_err(|e| log_store_error("create_recipe", e))?;
    let recipe = Recipe::create(&state.db, &new)
        .await
        .map_err(|e| log_store_error("create_recipe", e))?;

    info!(recipe_id = recipe.id, user_id = recipe.user_id, "recipe created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/recipes/{}", recipe.id))],
        Json(recipe),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<UpdateRecipeRequest>,
) -> Result<Json<Recipe>, ApiError> {
    let patch = services::recipe_patch(payload).map_err(|e| log_store_error("update_recipe", e))?;
    let recipe = Recipe::update(&state.db, id, &patch)
        .await
        .map_err(|e| log_store_error("update_recipe", e))?;

    info!(recipe_id = recipe.id, "recipe updated");
    Ok(Json(recipe))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    Recipe::soft_delete(&state.db, id)
        .await
        .map_err(|e| log_store_error("delete_recipe", e))?;

    info!(recipe_id = id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}
