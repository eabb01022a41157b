//! Application configuration. Data location, operator name, dashboard windows.

use crate::domain::{AlertWindows, DomainError, ViewLimits};
use serde::Deserialize;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_CURRENT_USER: &str = "Workshop Admin";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding companies.json, jobs.json, invoices.json, warranties.json.
    /// Read from MOTOR_DESK_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Name shown in the profile menu header. Read from MOTOR_DESK_CURRENT_USER.
    #[serde(default)]
    pub current_user: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Dashboard layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Companies listed in the activity overview (default 5).
    #[serde(default)]
    pub overview_limit: Option<usize>,

    /// Jobs listed under recent activity (default 5).
    #[serde(default)]
    pub recent_limit: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Alert windows
    // ─────────────────────────────────────────────────────────────────────────
    /// Days ahead counted as "due this week" (default 7).
    #[serde(default)]
    pub due_window_days: Option<i64>,

    /// Days ahead counted as "expiring soon" for warranties (default 30).
    #[serde(default)]
    pub warranty_window_days: Option<i64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        Self::load_from(std::env::var("MOTOR_DESK_CONFIG").ok().as_deref())
    }

    /// Optional config file plus `MOTOR_DESK_*` environment. A named file
    /// that cannot be read is an error.
    pub fn load_from(file: Option<&str>) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        // Environment wins over the file
        c = c.add_source(config::Environment::with_prefix("MOTOR_DESK").try_parsing(true));
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    pub fn current_user_or_default(&self) -> String {
        self.current_user
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENT_USER.to_string())
    }

    pub fn view_limits(&self) -> ViewLimits {
        let defaults = ViewLimits::default();
        ViewLimits {
            overview: self.overview_limit.unwrap_or(defaults.overview),
            recent: self.recent_limit.unwrap_or(defaults.recent),
        }
    }

    /// Alert windows. Non-positive values fall back to the defaults.
    pub fn alert_windows(&self) -> AlertWindows {
        let defaults = AlertWindows::default();
        AlertWindows {
            due_days: self
                .due_window_days
                .filter(|d| *d > 0)
                .unwrap_or(defaults.due_days),
            warranty_days: self
                .warranty_window_days
                .filter(|d| *d > 0)
                .unwrap_or(defaults.warranty_days),
        }
    }
}
