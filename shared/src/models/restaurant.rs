//! Restaurant Model (tenant root)

use serde::{Deserialize, Serialize};

/// Subscription plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum PlanTier {
    #[default]
    Free,
    Premium1,
    PremiumFull,
}

/// Per-plan quotas. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_products: Option<u32>,
    pub max_users: Option<u32>,
    pub max_daily_orders: Option<u32>,
}

impl PlanTier {
    pub fn limits(&self) -> PlanLimits {
        match self {
            Self::Free => PlanLimits {
                max_products: Some(20),
                max_users: Some(3),
                max_daily_orders: Some(100),
            },
            Self::Premium1 => PlanLimits {
                max_products: Some(100),
                max_users: Some(10),
                max_daily_orders: Some(1000),
            },
            Self::PremiumFull => PlanLimits {
                max_products: None,
                max_users: None,
                max_daily_orders: None,
            },
        }
    }
}

/// Restaurant entity
///
/// `api_key` is generated once at onboarding and never regenerated
/// implicitly. `slug` and `api_key` are globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub phone: String,
    /// Currency symbol used on receipts (e.g. "$", "€")
    pub currency: String,
    /// IANA timezone identifier for local-time display
    pub timezone: String,
    pub plan: PlanTier,
    pub is_active: bool,
    pub api_key: String,
    pub created_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub plan: Option<PlanTier>,
}
