use contracts::domain::a001_inventory::record::{InventoryRecord, InventoryResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Получить весь инвентарь одним запросом. Фильтрация и сортировка
/// происходят целиком на клиенте, параметров у запроса нет.
pub async fn fetch_inventory() -> Result<Vec<InventoryRecord>, String> {
    let url = format!("{}/inventory", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: InventoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.data)
}
