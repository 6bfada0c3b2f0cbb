//! API handlers for the inventory ledger REST endpoints

pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod history;
pub mod openapi;
pub mod reports;
pub mod settings;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route("/equipment/search", get(equipment::search_equipment))
        .route(
            "/equipment/:serial",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:serial/state", get(equipment::get_current_state))
        .route("/equipment/:serial/transfer", post(equipment::transfer_equipment))
        .route(
            "/equipment/:serial/history",
            get(history::get_equipment_history).post(history::record_assignment),
        )
        // Employees
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/employees/import", post(employees::import_employees))
        .route(
            "/employees/:name",
            put(employees::rename_employee).delete(employees::delete_employee),
        )
        .route("/employees/:name/equipment", get(employees::get_employee_equipment))
        .route("/employees/:name/history", get(employees::get_employee_history))
        // Equipment types
        .route(
            "/equipment-types",
            get(equipment_types::list_equipment_types).post(equipment_types::create_equipment_type),
        )
        .route(
            "/equipment-types/:name",
            delete(equipment_types::delete_equipment_type),
        )
        // History and transfers
        .route("/history", get(history::list_history))
        .route("/history/serials", get(history::list_serials))
        .route("/transfers", get(history::list_transfers))
        // Reports
        .route("/reports/inventory", get(reports::inventory_report))
        .route("/reports/search", get(reports::search_report))
        .route("/reports/employees/:name", get(reports::employee_report))
        .route("/reports/history", get(reports::history_report))
        .route("/reports/transfers", get(reports::transfers_report))
        .route("/stats/equipment-types", get(reports::equipment_type_stats))
        // Settings
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
