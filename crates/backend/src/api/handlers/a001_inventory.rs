use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_inventory::record::InventoryResponse;
use serde_json::json;

use crate::api::AppState;
use crate::domain::a001_inventory::service;

/// GET /api/inventory
///
/// Любая фатальная причина (ключ, id таблицы, транспорт) наружу выглядит
/// одинаково: 500 с обобщенным сообщением, детали только в логе.
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<InventoryResponse>, (StatusCode, Json<serde_json::Value>)> {
    match service::fetch_inventory(&state.sheets).await {
        Ok(data) => Ok(Json(InventoryResponse { data })),
        Err(e) => {
            tracing::error!("Error fetching inventory data: {e:#}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch inventory data" })),
            ))
        }
    }
}
