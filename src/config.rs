//! Application Configuration
//!
//! Fixed settings, provided to components through context.

use tracing::Level;

/// Slot the employee collection lives in; shared with older builds of the app
pub const EMPLOYEES_KEY: &str = "employeesDetail";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the employee array
    pub storage_key: String,
    /// How long a toast stays up
    pub toast_millis: u32,
    pub currency_symbol: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: EMPLOYEES_KEY.to_string(),
            toast_millis: 3000,
            currency_symbol: "₹".to_string(),
            log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}
