//! API integration tests
//!
//! Every test builds the full router over a ledger stored in a fresh
//! temporary directory and drives it with in-process requests.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use inventory_ledger::{
    api,
    config::AppConfig,
    ledger::date::{format_date, today, DATETIME_FORMAT},
    repository::{Ledger, Repository},
    services::Services,
    AppState,
};

struct TestApp {
    router: Router,
    root: TempDir,
}

async fn spawn_app() -> TestApp {
    let root = tempfile::tempdir().unwrap();

    let mut config = AppConfig::default();
    config.storage.data_directory = root.path().join("data");
    config.storage.settings_file = root.path().join("settings.json");

    let ledger = Ledger::open(
        &config.storage.data_directory,
        &config.ledger.default_equipment_types,
    )
    .await
    .unwrap();
    let services = Services::new(Repository::new(ledger), &config);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    TestApp {
        router: api::create_router(state),
        root,
    }
}

impl TestApp {
    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(format!("/api/v1{}", uri));
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.request(Method::GET, uri, None).await;
        (response.status(), body_json(response).await)
    }

    async fn send(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self.request(method, uri, Some(body)).await;
        (response.status(), body_json(response).await)
    }

    async fn add_employee(&self, name: &str) {
        let (status, _) = self
            .send(Method::POST, "/employees", json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn import(&self) -> (StatusCode, Value) {
        let response = self.request(Method::POST, "/employees/import", None).await;
        (response.status(), body_json(response).await)
    }

    /// SN1 handed to Ivanov on 01.01.2024
    async fn add_monitor(&self) {
        let (status, body) = self
            .send(
                Method::POST,
                "/equipment",
                json!({
                    "equipment_type": "Монитор",
                    "model": "X",
                    "serial_number": "SN1",
                    "assignment": "Ivanov",
                    "date": "01.01.2024"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    async fn transfer(&self, serial: &str, employee: &str, date: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            &format!("/equipment/{}/transfer", serial),
            json!({ "employee": employee, "date": date }),
        )
        .await
    }
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

fn snapshot(root: &Path) -> Value {
    let bytes = std::fs::read(root.join("data").join("ledger.json")).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], 0);
}

#[tokio::test]
async fn test_added_equipment_is_recorded_in_history() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, history) = app.get("/equipment/SN1/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        history,
        json!([{
            "equipment_type": "Монитор",
            "serial_number": "SN1",
            "assignment": "Ivanov",
            "date": "01.01.2024"
        }])
    );

    let (_, state) = app.get("/equipment/SN1/state").await;
    assert_eq!(state["assignment"], "Ivanov");
    assert_eq!(state["date"], "01.01.2024");

    let saved = snapshot(app.root.path());
    assert_eq!(saved["inventory"][0]["serial_number"], "SN1");
    assert_eq!(saved["history"]["SN1"][0]["assignment"], "Ivanov");
}

#[tokio::test]
async fn test_transfer_updates_state_history_and_transfers() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, record) = app.transfer("SN1", "Petrov", "15.06.2024").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["assignment"], "Petrov");

    let (_, state) = app.get("/equipment/SN1/state").await;
    assert_eq!(state["assignment"], "Petrov");
    assert_eq!(state["date"], "15.06.2024");

    let (_, history) = app.get("/equipment/SN1/history").await;
    assert_eq!(history.as_array().unwrap().len(), 2);

    let (status, transfers) = app
        .get("/transfers?start=01.01.2024&end=31.12.2024")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        transfers,
        json!([{
            "serial_number": "SN1",
            "equipment_type": "Монитор",
            "from_employee": "Ivanov",
            "to_employee": "Petrov",
            "date": "15.06.2024"
        }])
    );
}

#[tokio::test]
async fn test_missing_dates_default_to_today() {
    let app = spawn_app().await;

    let (status, record) = app
        .send(
            Method::POST,
            "/equipment",
            json!({
                "equipment_type": "Монитор",
                "serial_number": "SN1",
                "assignment": "Ivanov"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["date"], format_date(today()));
    let created = record["created_datetime"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(created, DATETIME_FORMAT).is_ok());

    // No assignee, no date
    let (_, spare) = app
        .send(
            Method::POST,
            "/equipment",
            json!({ "equipment_type": "Мышь", "serial_number": "M1" }),
        )
        .await;
    assert_eq!(spare["date"], "");

    let (status, moved) = app
        .send(
            Method::POST,
            "/equipment/SN1/transfer",
            json!({ "employee": "Petrov" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["assignment"], "Petrov");
    assert_eq!(moved["date"], format_date(today()));

    let (_, history) = app.get("/equipment/SN1/history").await;
    assert_eq!(history[1]["date"], format_date(today()));
}

#[tokio::test]
async fn test_backdated_transfer_is_rejected() {
    let app = spawn_app().await;
    app.add_monitor().await;
    app.transfer("SN1", "Petrov", "15.06.2024").await;

    let (status, body) = app.transfer("SN1", "Sidorov", "01.03.2024").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BadValue");

    let (_, state) = app.get("/equipment/SN1/state").await;
    assert_eq!(state["assignment"], "Petrov");
}

#[tokio::test]
async fn test_transfers_before_first_assignment_are_empty() {
    let app = spawn_app().await;
    app.add_monitor().await;
    app.transfer("SN1", "Petrov", "15.06.2024").await;

    let (status, transfers) = app
        .get("/transfers?start=01.01.2023&end=31.12.2023")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transfers, json!([]));
}

#[tokio::test]
async fn test_transfers_reject_bad_window() {
    let app = spawn_app().await;

    let (status, body) = app.get("/transfers?start=31.12.2024&end=01.01.2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = app.get("/transfers?start=2024-01-01&end=31.12.2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transfer_to_current_holder_is_rejected() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, _) = app.transfer("SN1", "Ivanov", "15.06.2024").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.transfer("SN1", "Petrov", "15/06/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.transfer("NOPE", "Petrov", "15.06.2024").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_blocked_only_by_live_assignment() {
    let app = spawn_app().await;
    app.add_employee("Ivanov").await;
    app.add_employee("Petrov").await;
    app.add_monitor().await;

    let response = app.request(Method::DELETE, "/employees/Ivanov", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "StillReferenced");

    app.transfer("SN1", "Petrov", "15.06.2024").await;

    // History still names Ivanov, which does not block deletion
    let response = app.request(Method::DELETE, "/employees/Ivanov", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, employees) = app.get("/employees").await;
    assert_eq!(employees, json!(["Petrov"]));

    let (_, history) = app.get("/equipment/SN1/history").await;
    assert_eq!(history[0]["assignment"], "Ivanov");
}

#[tokio::test]
async fn test_rename_employee_rewrites_history() {
    let app = spawn_app().await;
    app.add_employee("Ivanov").await;
    app.add_employee("Petrov").await;
    app.add_monitor().await;
    app.transfer("SN1", "Petrov", "15.06.2024").await;
    app.transfer("SN1", "Ivanov", "01.09.2024").await;

    let (_, before) = app.get("/history").await;

    let (status, outcome) = app
        .send(
            Method::PUT,
            "/employees/Ivanov",
            json!({ "new_name": "I. Ivanov" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome, json!({ "records": 1, "history_entries": 2 }));

    let (_, employees) = app.get("/employees").await;
    assert_eq!(employees, json!(["I. Ivanov", "Petrov"]));

    let (_, after) = app.get("/history").await;
    assert_eq!(
        before.as_array().unwrap().len(),
        after.as_array().unwrap().len()
    );
    assert!(after
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["assignment"] != "Ivanov"));

    let (_, state) = app.get("/equipment/SN1/state").await;
    assert_eq!(state["assignment"], "I. Ivanov");

    let (status, _) = app
        .send(
            Method::PUT,
            "/employees/Petrov",
            json!({ "new_name": "I. Ivanov" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_equipment_validation_and_conflicts() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/equipment",
            json!({ "equipment_type": "Монитор", "serial_number": "SN1" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .send(
            Method::POST,
            "/equipment",
            json!({ "equipment_type": "Телевизор", "serial_number": "TV1" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::POST,
            "/equipment",
            json!({ "equipment_type": "Монитор", "serial_number": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, health) = app.get("/health").await;
    assert_eq!(health["records"], 1);
}

#[tokio::test]
async fn test_edit_assignment_records_history() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, record) = app
        .send(
            Method::PUT,
            "/equipment/SN1",
            json!({ "assignment": "Sidorov", "date": "03.03.2024" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["assignment"], "Sidorov");

    let (_, history) = app.get("/equipment/SN1/history").await;
    let names: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["assignment"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ivanov", "Sidorov"]);
}

#[tokio::test]
async fn test_delete_equipment_keeps_history() {
    let app = spawn_app().await;
    app.add_monitor().await;
    app.transfer("SN1", "Petrov", "15.06.2024").await;

    let response = app.request(Method::DELETE, "/equipment/SN1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = app.get("/equipment/SN1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, history) = app.get("/equipment/SN1/history").await;
    assert_eq!(history[0]["equipment_type"], "-");

    let (_, transfers) = app
        .get("/transfers?start=01.01.2024&end=31.12.2024")
        .await;
    assert_eq!(transfers[0]["equipment_type"], "-");
}

#[tokio::test]
async fn test_equipment_type_in_use_cannot_be_deleted() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let (status, _) = app
        .send(Method::POST, "/equipment-types", json!({ "name": "Planshet" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, types) = app.get("/equipment-types").await;
    assert!(types.as_array().unwrap().contains(&json!("Planshet")));

    let response = app
        .request(Method::DELETE, "/equipment-types/Planshet", None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let monitor = "/equipment-types/%D0%9C%D0%BE%D0%BD%D0%B8%D1%82%D0%BE%D1%80";
    let response = app.request(Method::DELETE, monitor, None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_search_and_employee_views() {
    let app = spawn_app().await;
    app.add_monitor().await;
    app.send(
        Method::POST,
        "/equipment",
        json!({
            "equipment_type": "Мышь",
            "serial_number": "M1",
            "assignment": "Petrov",
            "date": "02.02.2024",
            "comments": "Wireless Logitech"
        }),
    )
    .await;

    let (_, found) = app.get("/equipment/search?q=logitech").await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["serial_number"], "M1");

    let (_, held) = app.get("/employees/Ivanov/equipment").await;
    assert_eq!(held.as_array().unwrap().len(), 1);
    assert_eq!(held[0]["serial_number"], "SN1");

    let (_, report) = app.import().await;
    assert_eq!(report, json!({ "added": 2, "total": 2 }));

    let (_, stats) = app.get("/stats/equipment-types").await;
    assert_eq!(stats.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reports() {
    let app = spawn_app().await;
    app.add_monitor().await;
    app.transfer("SN1", "Petrov", "15.06.2024").await;

    let (status, inventory) = app.get("/reports/inventory").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inventory["rows"].as_array().unwrap().len(), 1);
    assert_eq!(
        inventory["headers"].as_array().unwrap().len(),
        inventory["rows"][0].as_array().unwrap().len()
    );

    let (status, transfers) = app
        .get("/reports/transfers?start=01.01.2024&end=31.12.2024")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transfers["rows"].as_array().unwrap().len(), 1);

    let (_, history) = app.get("/reports/history").await;
    assert_eq!(history["rows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_switch_data_directory() {
    let app = spawn_app().await;
    app.add_monitor().await;

    let other = app.root.path().join("other");
    let (status, settings) = app
        .send(
            Method::PUT,
            "/settings",
            json!({ "data_directory": other }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["data_directory"], json!(other));

    let (_, health) = app.get("/health").await;
    assert_eq!(health["records"], 0);

    let saved: Value =
        serde_json::from_slice(&std::fs::read(app.root.path().join("settings.json")).unwrap())
            .unwrap();
    assert_eq!(saved["data_directory"], json!(other));
}
