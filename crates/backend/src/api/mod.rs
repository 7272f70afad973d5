pub mod handlers;

use crate::shared::config::SheetsConfig;

/// Разделяемое состояние обработчиков. Клиент источника данных
/// пересоздается на каждый запрос из этой конфигурации, общей изменяемой
/// памяти между запросами нет.
#[derive(Clone)]
pub struct AppState {
    pub sheets: SheetsConfig,
}
