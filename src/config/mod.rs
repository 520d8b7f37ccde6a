use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub selection: SelectionConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки выбора мест и сессий
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Лимит выбранных мест по умолчанию, если клиент не задал свой.
    pub default_max_selection: usize,
    /// Верхняя граница total_seats (как у транспорта в админке).
    pub max_total_seats: u32,
    /// Время жизни сессии выбора без обращений, минуты.
    pub session_ttl_minutes: i64,
    /// Интервал фоновой чистки протухших сессий, секунды.
    pub cleanup_interval_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seatplan=debug,tower_http=debug".to_string()),
            },
            selection: SelectionConfig {
                default_max_selection: env::var("DEFAULT_MAX_SELECTION")
                    .unwrap_or_else(|_| "4".to_string())
                    .parse()
                    .expect("DEFAULT_MAX_SELECTION must be a valid number"),
                max_total_seats: env::var("MAX_TOTAL_SEATS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .expect("MAX_TOTAL_SEATS must be a valid number"),
                session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("SESSION_TTL_MINUTES must be a valid number"),
                cleanup_interval_seconds: env::var("CLEANUP_INTERVAL_SECONDS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .expect("CLEANUP_INTERVAL_SECONDS must be a valid number"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "test".to_string(),
                rust_log: "seatplan=debug".to_string(),
            },
            selection: SelectionConfig {
                default_max_selection: 4,
                max_total_seats: 500,
                session_ttl_minutes: 30,
                cleanup_interval_seconds: 300,
            },
        }
    }
}
