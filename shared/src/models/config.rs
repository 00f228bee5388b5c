//! Restaurant configuration model

use serde::{Deserialize, Serialize};

/// Printer transport kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PrinterKind {
    #[default]
    Usb,
    Network,
    /// Writes to a file, for testing without hardware
    File,
}

/// Per-restaurant configuration (one-to-one with the restaurant)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantConfig {
    pub restaurant_id: i64,
    pub printer_enabled: bool,
    pub printer_kind: PrinterKind,
    pub printer_address: String,
    pub printer_port: i32,
    pub theme: String,
    pub show_prices: bool,
}

impl RestaurantConfig {
    /// Defaults applied at onboarding
    pub fn defaults(restaurant_id: i64) -> Self {
        Self {
            restaurant_id,
            printer_enabled: false,
            printer_kind: PrinterKind::Usb,
            printer_address: String::new(),
            printer_port: 9100,
            theme: "default".to_string(),
            show_prices: true,
        }
    }
}

/// Update configuration payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    pub printer_enabled: Option<bool>,
    pub printer_kind: Option<PrinterKind>,
    pub printer_address: Option<String>,
    pub printer_port: Option<i32>,
    pub theme: Option<String>,
    pub show_prices: Option<bool>,
}
