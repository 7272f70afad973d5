use serde::Deserialize;

use super::config::SheetsConfig;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Диапазон, покрывающий весь лист инвентаря
const FETCH_RANGE: &str = "A1:Z1000";

/// Ошибки на границе с Google Sheets. Все фатальны для запроса целиком,
/// различие транспортных и конфигурационных причин наружу не выносится.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("Google Sheets API key is missing")]
    MissingCredentials,

    #[error("spreadsheet id is missing")]
    MissingSpreadsheetId,

    #[error("Google Sheets request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Google Sheets API returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Explicit handle around the Google Sheets REST API.
///
/// Собирается из конфигурации на каждый вызов сервиса, глобального
/// клиента нет. Без таймаута: один запрос на загрузку страницы,
/// без повторов и отмены.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    #[serde(default)]
    properties: SheetProperties,
}

#[derive(Debug, Default, Deserialize)]
struct SheetProperties {
    #[serde(default)]
    title: String,
}

/// Ответ values.get: `values` отсутствует у полностью пустого листа
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn from_config(config: &SheetsConfig) -> Result<Self, SheetsError> {
        if config.api_key.trim().is_empty() {
            return Err(SheetsError::MissingCredentials);
        }
        if config.spreadsheet_id.trim().is_empty() {
            return Err(SheetsError::MissingSpreadsheetId);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            spreadsheet_id: config.spreadsheet_id.trim().to_string(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Читает все строки листа инвентаря. Первая строка — заголовки.
    ///
    /// Имя листа не фиксировано: сначала запрашиваются метаданные таблицы
    /// и берется название первого листа, `Sheet1` как запасной вариант.
    pub async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let sheet_title = self.first_sheet_title().await?;
        tracing::info!("Using sheet: {}", sheet_title);

        let range = format!("{}!{}", sheet_title, FETCH_RANGE);
        let url = format!(
            "{}/{}/values/{}?key={}&majorDimension=ROWS",
            SHEETS_API_BASE,
            self.spreadsheet_id,
            urlencoding::encode(&range),
            self.api_key
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status(status));
        }

        let value_range: ValueRange = response.json().await?;
        Ok(value_range.values)
    }

    async fn first_sheet_title(&self) -> Result<String, SheetsError> {
        let url = format!(
            "{}/{}?key={}&fields=sheets.properties.title",
            SHEETS_API_BASE, self.spreadsheet_id, self.api_key
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status(status));
        }

        let meta: SpreadsheetMeta = response.json().await?;
        let title = meta
            .sheets
            .into_iter()
            .next()
            .map(|s| s.properties.title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Sheet1".to_string());

        Ok(title)
    }
}
