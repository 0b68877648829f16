//! Request builder and response parser for every depot route.
//!
//! `DepotClient` holds only a base URL. Builders are grouped by resource;
//! parsers are generic over the payload type and differ only in the status
//! they expect and the body shape they decode.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CarUpdate, CategoryUpdate, ItemUpdate, NewCar, NewCategory, NewItem, NewTask, TaskUpdate,
};

#[derive(Debug, Clone)]
pub struct DepotClient {
    base_url: String,
}

impl DepotClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // --- items ---

    pub fn build_list_items(&self) -> HttpRequest {
        self.get("/items")
    }

    pub fn build_get_item(&self, id: u64) -> HttpRequest {
        self.get(&format!("/items/{id}"))
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, "/items", input)
    }

    pub fn build_update_item(&self, id: u64, input: &ItemUpdate) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/items/{id}"), input)
    }

    pub fn build_delete_item(&self, id: u64) -> HttpRequest {
        self.delete(&format!("/items/{id}"))
    }

    // --- categories ---

    pub fn build_list_categories(&self) -> HttpRequest {
        self.get("/categories")
    }

    pub fn build_get_category(&self, id: u64) -> HttpRequest {
        self.get(&format!("/categories/{id}"))
    }

    pub fn build_create_category(&self, input: &NewCategory) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, "/categories", input)
    }

    pub fn build_update_category(
        &self,
        id: u64,
        input: &CategoryUpdate,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/categories/{id}"), input)
    }

    pub fn build_delete_category(&self, id: u64) -> HttpRequest {
        self.delete(&format!("/categories/{id}"))
    }

    // --- cars ---

    pub fn build_list_cars(&self) -> HttpRequest {
        self.get("/cars")
    }

    pub fn build_get_car(&self, id: u64) -> HttpRequest {
        self.get(&format!("/cars/{id}"))
    }

    pub fn build_create_car(&self, input: &NewCar) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, "/cars", input)
    }

    pub fn build_update_car(&self, id: u64, input: &CarUpdate) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/cars/{id}"), input)
    }

    pub fn build_delete_car(&self, id: u64) -> HttpRequest {
        self.delete(&format!("/cars/{id}"))
    }

    // --- tasks ---

    pub fn build_list_tasks(&self, car_id: u64) -> HttpRequest {
        self.get(&format!("/cars/{car_id}/tasks"))
    }

    pub fn build_get_task(&self, car_id: u64, task_id: u64) -> HttpRequest {
        self.get(&format!("/cars/{car_id}/tasks/{task_id}"))
    }

    pub fn build_create_task(&self, car_id: u64, input: &NewTask) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &format!("/cars/{car_id}/tasks"), input)
    }

    pub fn build_update_task(
        &self,
        car_id: u64,
        task_id: u64,
        input: &TaskUpdate,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(
            HttpMethod::Put,
            &format!("/cars/{car_id}/tasks/{task_id}"),
            input,
        )
    }

    pub fn build_delete_task(&self, car_id: u64, task_id: u64) -> HttpRequest {
        self.delete(&format!("/cars/{car_id}/tasks/{task_id}"))
    }

    // --- parsing ---

    /// `200` with a JSON array.
    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// `200` with a single entity (get, update).
    pub fn parse_entity<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// `201` with the created entity.
    pub fn parse_created<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    /// `200` with a `{"message": ...}` confirmation; returns the message.
    pub fn parse_deleted(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        response
            .message()
            .ok_or_else(|| {
                ApiError::Deserialization(format!("expected a message body, got {}", response.body))
            })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.url(path))
    }

    fn delete(&self, path: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.url(path))
    }

    fn send_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(method, self.url(path), body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map an unexpected status to the matching `ApiError`. 404 and 400 carry the
/// server's message when the body has one.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let message = || response.message().unwrap_or_else(|| response.body.clone());
    match response.status {
        404 => Err(ApiError::NotFound(message())),
        400 => Err(ApiError::Validation(message())),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}
