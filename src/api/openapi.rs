//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{employees, equipment, equipment_types, health, history, reports, settings};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Ledger API",
        version = "0.1.0",
        description = "IT equipment inventory and assignment history REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Equipment
        equipment::list_equipment,
        equipment::search_equipment,
        equipment::get_equipment,
        equipment::get_current_state,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::transfer_equipment,
        equipment::delete_equipment,
        // Employees
        employees::list_employees,
        employees::create_employee,
        employees::rename_employee,
        employees::delete_employee,
        employees::import_employees,
        employees::get_employee_equipment,
        employees::get_employee_history,
        // Equipment types
        equipment_types::list_equipment_types,
        equipment_types::create_equipment_type,
        equipment_types::delete_equipment_type,
        // History
        history::get_equipment_history,
        history::record_assignment,
        history::list_history,
        history::list_serials,
        history::list_transfers,
        // Reports
        reports::inventory_report,
        reports::search_report,
        reports::employee_report,
        reports::history_report,
        reports::transfers_report,
        reports::equipment_type_stats,
        // Settings
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::EquipmentRecord,
            crate::models::equipment::CurrentState,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::TransferRequest,
            // Employees
            crate::models::employee::CreateEmployee,
            crate::models::employee::RenameEmployee,
            crate::models::employee::RenameOutcome,
            crate::models::employee::ImportReport,
            // Equipment types
            crate::models::equipment_type::CreateEquipmentType,
            // History
            crate::models::history::HistoryEntry,
            crate::models::history::HistoryRow,
            crate::models::transfer::Transfer,
            history::RecordAssignmentResponse,
            // Reports
            crate::models::report::ReportTable,
            crate::models::report::TypeCount,
            // Settings
            crate::models::settings::SettingsResponse,
            crate::models::settings::UpdateSettingsRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment records"),
        (name = "employees", description = "Employee roster"),
        (name = "equipment-types", description = "Equipment type catalog"),
        (name = "history", description = "Assignment history and transfers"),
        (name = "reports", description = "Export tables and chart data"),
        (name = "settings", description = "Storage settings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
