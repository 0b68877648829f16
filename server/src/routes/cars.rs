//! `/cars` and the `/cars/{id}/tasks` sub-resource.
//!
//! Handlers only lock the garage and translate results; parent resolution,
//! the task scope check and payload validation all happen inside [`Garage`]
//! in that order.
//!
//! The `Json` extractor runs before any of that. A body it rejects (missing
//! `Content-Type`, malformed JSON) gets axum's 415 or 400 even when the car
//! does not exist.
//!
//! [`Garage`]: crate::store::Garage

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{AppError, Message},
    state::AppState,
    store::{Car, CarPayload, RequestedId, Task, TaskPayload},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/{id}", get(get_car).put(update_car).delete(delete_car))
        .route("/{id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/{id}/tasks/{task_id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}

// --- cars ---

async fn list_cars(State(state): State<AppState>) -> Json<Vec<Car>> {
    let garage = state.garage.read().await;
    Json(garage.cars().to_vec())
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Car>, AppError> {
    let garage = state.garage.read().await;
    garage.car(id).cloned().map(Json)
}

async fn create_car(
    State(state): State<AppState>,
    Json(payload): Json<CarPayload>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = state.garage.write().await.create_car(payload)?;
    tracing::debug!(id = car.id, plate = %car.plate_number, "car created");
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
    Json(payload): Json<CarPayload>,
) -> Result<Json<Car>, AppError> {
    let mut garage = state.garage.write().await;
    garage.update_car(id, payload).map(Json)
}

#[tracing::instrument(skip_all, level = "debug", fields(%id))]
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<RequestedId>,
) -> Result<Json<Message>, AppError> {
    let (car, tasks_removed) = state.garage.write().await.delete_car(id)?;
    tracing::debug!(id = car.id, tasks_removed, "car deleted");
    Ok(Json(Message::new("Car deleted")))
}

// --- tasks ---

async fn list_tasks(
    State(state): State<AppState>,
    Path(car_id): Path<RequestedId>,
) -> Result<Json<Vec<Task>>, AppError> {
    let garage = state.garage.read().await;
    garage.tasks(car_id).map(Json)
}

async fn get_task(
    State(state): State<AppState>,
    Path((car_id, task_id)): Path<(RequestedId, RequestedId)>,
) -> Result<Json<Task>, AppError> {
    let garage = state.garage.read().await;
    garage.task(car_id, task_id).cloned().map(Json)
}

#[tracing::instrument(skip_all, level = "debug", fields(%car_id))]
async fn create_task(
    State(state): State<AppState>,
    Path(car_id): Path<RequestedId>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = state.garage.write().await.create_task(car_id, payload)?;
    tracing::debug!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(state): State<AppState>,
    Path((car_id, task_id)): Path<(RequestedId, RequestedId)>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, AppError> {
    let mut garage = state.garage.write().await;
    garage.update_task(car_id, task_id, payload).map(Json)
}

#[tracing::instrument(skip_all, level = "debug", fields(%car_id, %task_id))]
async fn delete_task(
    State(state): State<AppState>,
    Path((car_id, task_id)): Path<(RequestedId, RequestedId)>,
) -> Result<Json<Message>, AppError> {
    state.garage.write().await.delete_task(car_id, task_id)?;
    tracing::debug!("task deleted");
    Ok(Json(Message::new("Task deleted")))
}
