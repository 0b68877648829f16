use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{AppError, Message},
    state::AppState,
    store::{Category, CategoryPayload, RequestedId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let categories = state.categories.read().await;
    Json(categories.list().to_vec())
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Category>, AppError> {
    let categories = state.categories.read().await;
    categories.get(id).cloned().map(Json)
}

async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = state.categories.write().await.create(payload)?;
    tracing::debug!(id = category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Category>, AppError> {
    let mut categories = state.categories.write().await;
    categories.update(id, payload).map(Json)
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Message>, AppError> {
    let category = state.categories.write().await.delete(id)?;
    tracing::debug!(id = category.id, "category deleted");
    Ok(Json(Message::new("Category deleted")))
}
