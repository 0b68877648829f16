mod common;

use axum::http::StatusCode;
use common::{message, TestApp};
use depot_server::store::RequestedId;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

// --- cars ---

#[tokio::test]
async fn list_cars_returns_seed() {
    let app = TestApp::new();
    let (status, body) = app.get("/cars").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "plateNumber": "ABC-123",
            "brand": "Toyota",
            "model": "Corolla",
            "year": 2010
        })
    );
}

#[tokio::test]
async fn get_car_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/cars/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");
}

#[tokio::test]
async fn create_car_without_plate_number() {
    let app = TestApp::new();
    let (status, body) = app.post("/cars", r#"{"brand":"VW"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "plateNumber is required");
}

#[tokio::test]
async fn create_car_with_string_year() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/cars", r#"{"plateNumber":"HUN-001","year":"2018"}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "year must be a number if provided");
}

#[tokio::test]
async fn create_car_with_plate_only_omits_optional_fields() {
    let app = TestApp::new();
    let (status, body) = app.post("/cars", r#"{"plateNumber":"MIN-1"}"#).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 3, "plateNumber": "MIN-1" }));
}

#[tokio::test]
async fn create_car_with_non_string_brand_and_model() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/cars", r#"{"plateNumber":"P-1","brand":5,"model":true}"#)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 3, "plateNumber": "P-1", "brand": 5, "model": true })
    );
}

#[tokio::test]
async fn update_car_model() {
    let app = TestApp::new();
    let (status, body) = app.put("/cars/1", r#"{"model":"Yaris"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["model"], "Yaris");
    assert_eq!(body["brand"], "Toyota");
}

#[tokio::test]
async fn update_car_with_bad_year_changes_nothing() {
    let app = TestApp::new();
    let (_, before) = app.get("/cars/1").await;

    let (status, body) = app
        .put("/cars/1", r#"{"plateNumber":"NEW-000","year":"asd-asd"}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "year must be a number if provided");

    let (_, after) = app.get("/cars/1").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_car_with_empty_body_is_noop() {
    let app = TestApp::new();
    let (_, before) = app.get("/cars/2").await;
    let (status, body) = app.put("/cars/2", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, before);
}

#[tokio::test]
async fn delete_car_cascades_to_tasks() {
    let app = TestApp::new();
    let (status, tasks) = app.get("/cars/1/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    let (status, body) = app.delete("/cars/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Car deleted" }));

    let (status, body) = app.get("/cars/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");

    let (status, body) = app.get("/cars/1/tasks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");

    let (status, body) = app.get("/cars/1/tasks/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");

    let garage = app.state.garage.read().await;
    assert!(garage.tasks(RequestedId::from(2_u64)).unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_car() {
    let app = TestApp::new();
    let (status, body) = app.delete("/cars/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");
}

// --- tasks ---

#[tokio::test]
async fn list_tasks_of_seed_car() {
    let app = TestApp::new();
    let (status, body) = app.get("/cars/1/tasks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "carId": 1,
            "title": "Oil change",
            "description": "Replace engine oil and filter",
            "completed": false
        }])
    );
}

#[rstest]
#[case::get("GET", "/cars/999/tasks", "")]
#[case::get_one("GET", "/cars/999/tasks/1", "")]
#[case::create("POST", "/cars/999/tasks", r#"{"title":"Any"}"#)]
#[case::create_invalid("POST", "/cars/999/tasks", "{}")]
#[case::update("PUT", "/cars/999/tasks/111", r#"{"completed":true}"#)]
#[case::update_invalid("PUT", "/cars/999/tasks/1", r#"{"completed":"yes"}"#)]
#[case::delete("DELETE", "/cars/999/tasks/1", "")]
#[case::non_numeric("GET", "/cars/abc/tasks", "")]
#[tokio::test]
async fn missing_car_is_reported_before_anything_else(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: &str,
) {
    let app = TestApp::new();
    let request = if body.is_empty() {
        common::empty_request(method, uri)
    } else {
        common::json_request(method, uri, body)
    };
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");
}

#[rstest]
#[case::get("GET", "/cars/1/tasks/999", "")]
#[case::update("PUT", "/cars/1/tasks/999", r#"{"completed":true}"#)]
#[case::update_invalid("PUT", "/cars/1/tasks/999", r#"{"completed":"yes"}"#)]
#[case::delete("DELETE", "/cars/1/tasks/999", "")]
#[case::non_numeric("GET", "/cars/1/tasks/first", "")]
#[tokio::test]
async fn missing_task_is_404(#[case] method: &str, #[case] uri: &str, #[case] body: &str) {
    let app = TestApp::new();
    let request = if body.is_empty() {
        common::empty_request(method, uri)
    } else {
        common::json_request(method, uri, body)
    };
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Task not found");
}

#[tokio::test]
async fn task_is_not_reachable_through_another_car() {
    let app = TestApp::new();
    let (status, created) = app.post("/cars/2/tasks", r#"{"title":"Tire swap"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = created["id"].as_u64().unwrap();
    let wrong = format!("/cars/1/tasks/{task_id}");

    let (status, body) = app.get(&wrong).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Task not found");

    let (status, body) = app.put(&wrong, r#"{"completed":true}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Task not found");

    let (status, body) = app.delete(&wrong).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Task not found");

    let (status, body) = app.get(&format!("/cars/2/tasks/{task_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn create_task_without_title() {
    let app = TestApp::new();
    let (status, body) = app.post("/cars/2/tasks", r#"{"description":"a"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "title is required");
}

#[tokio::test]
async fn create_task_with_non_boolean_completed() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/cars/2/tasks", r#"{"title":"Tire swap","completed":"no"}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "completed must be a boolean if provided");
}

#[tokio::test]
async fn update_task_title_and_description() {
    let app = TestApp::new();
    let (status, body) = app
        .put(
            "/cars/1/tasks/1",
            r#"{"title":"Oil change + filter","description":"Change the oil and filter"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "carId": 1,
            "title": "Oil change + filter",
            "description": "Change the oil and filter",
            "completed": false
        })
    );
}

#[tokio::test]
async fn update_task_with_non_boolean_completed_keeps_task() {
    let app = TestApp::new();
    let (_, before) = app.get("/cars/1/tasks/1").await;

    let (status, body) = app
        .put("/cars/1/tasks/1", r#"{"title":"Renamed","completed":"yes"}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "completed must be a boolean if provided");

    let (_, after) = app.get("/cars/1/tasks/1").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn complete_seed_task_then_delete_its_car() {
    let app = TestApp::new();

    let (status, body) = app.put("/cars/1/tasks/1", r#"{"completed":true}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["carId"], 1);
    assert_eq!(body["completed"], true);

    let (status, body) = app.delete("/cars/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&body), "Car deleted");

    let (status, body) = app.get("/cars/1/tasks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Car not found");
}

#[tokio::test]
async fn new_car_task_lifecycle() {
    let app = TestApp::new();

    let (status, car) = app
        .post(
            "/cars",
            r#"{"plateNumber":"HUN-001","brand":"VW","model":"Golf","year":2018}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        car,
        json!({ "id": 3, "plateNumber": "HUN-001", "brand": "VW", "model": "Golf", "year": 2018 })
    );

    let (status, task) = app
        .post(
            "/cars/3/tasks",
            r#"{"title":"Brake check","description":"Inspect pads and discs"}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        task,
        json!({
            "id": 2,
            "carId": 3,
            "title": "Brake check",
            "description": "Inspect pads and discs",
            "completed": false
        })
    );

    let (status, updated) = app.put("/cars/3/tasks/2", r#"{"completed":true}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);

    let (status, list) = app.get("/cars/3/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([updated]));

    let (status, body) = app.delete("/cars/3/tasks/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted" }));

    let (status, list) = app.get("/cars/3/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn task_text_fields_are_stored_as_sent() {
    let app = TestApp::new();
    let (status, body) = app
        .put("/cars/1/tasks/1", r#"{"title":3,"description":null}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "carId": 1, "title": 3, "description": null, "completed": false })
    );

    let (status, body) = app
        .post("/cars/2/tasks", r#"{"title":"Wipers","description":7}"#)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], 7);
}

/// Body extraction runs before the handler, so a request the `Json`
/// extractor rejects never reaches the car lookup.
#[rstest]
#[case::create("POST", "/cars/999/tasks")]
#[case::update("PUT", "/cars/999/tasks/1")]
#[tokio::test]
async fn body_without_content_type_is_rejected_before_car_lookup(
    #[case] method: &str,
    #[case] uri: &str,
) {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(r#"{"title":"Any"}"#.to_string())
        .unwrap();
    let (status, _) = app.send_raw(request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn reset_restores_cars_and_tasks() {
    let app = TestApp::new();
    app.delete("/cars/1").await;
    app.post("/cars", r#"{"plateNumber":"TMP-1"}"#).await;

    app.state.reset().await;

    let (_, cars) = app.get("/cars").await;
    assert_eq!(cars.as_array().unwrap().len(), 2);
    let (status, tasks) = app.get("/cars/1/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks[0]["id"], 1);
    let (_, car) = app.post("/cars", r#"{"plateNumber":"TMP-2"}"#).await;
    assert_eq!(car["id"], 3);
}
