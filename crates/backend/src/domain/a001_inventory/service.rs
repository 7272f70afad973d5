use contracts::domain::a001_inventory::record::InventoryRecord;

use super::normalize;
use crate::shared::config::SheetsConfig;
use crate::shared::sheets::SheetsClient;

/// Полная выборка инвентаря: лист целиком, нормализация с нуля.
///
/// Клиент собирается из конфигурации на каждый вызов; неполная
/// конфигурация фатальна для выборки, как и транспортная ошибка.
/// Список не переживает запрос: каждый вызов строит его заново.
/// Пустой лист — успешный пустой результат.
pub async fn fetch_inventory(config: &SheetsConfig) -> anyhow::Result<Vec<InventoryRecord>> {
    let sheets = SheetsClient::from_config(config)?;
    let rows = sheets.fetch_rows().await?;

    if rows.is_empty() {
        tracing::warn!("No data found in spreadsheet");
        return Ok(Vec::new());
    }

    let records = normalize::normalize(&rows);
    tracing::info!("Successfully processed {} inventory items", records.len());

    Ok(records)
}
