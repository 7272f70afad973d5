use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    /// Идентификатор Google-таблицы с инвентарем
    pub spreadsheet_id: String,
    /// API key сервисного аккаунта (read-only доступ к таблицам)
    pub api_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[sheets]
spreadsheet_id = ""
api_key = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. config.toml next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The `SPREADSHEET_ID` and `GOOGLE_SHEETS_API_KEY` environment variables
/// override the file values when set.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;

    if let Ok(id) = std::env::var("SPREADSHEET_ID") {
        config.sheets.spreadsheet_id = id;
    }
    if let Ok(key) = std::env::var("GOOGLE_SHEETS_API_KEY") {
        config.sheets.api_key = key;
    }

    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
