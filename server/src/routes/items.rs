use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{AppError, Message},
    state::AppState,
    store::{Item, ItemPayload, RequestedId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.items.read().await;
    Json(items.list().to_vec())
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Item>, AppError> {
    let items = state.items.read().await;
    items.get(id).cloned().map(Json)
}

async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = state.items.write().await.create(payload)?;
    tracing::debug!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, AppError> {
    let mut items = state.items.write().await;
    items.update(id, payload).map(Json)
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Message>, AppError> {
    let item = state.items.write().await.delete(id)?;
    tracing::debug!(id = item.id, "item deleted");
    Ok(Json(Message::new("Item deleted")))
}
