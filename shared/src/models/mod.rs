//! Domain models for the Comanda platform
//!
//! Every tenant-owned entity carries its `restaurant_id`; persistence-layer
//! queries must always filter on it.

pub mod config;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod user;

pub use config::{ConfigUpdate, PrinterKind, RestaurantConfig};
pub use order::{
    ConsumptionMode, LineItem, LineItemView, Order, OrderDraft, OrderStatus, OrderView,
    PaymentMethod,
};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use restaurant::{PlanLimits, PlanTier, Restaurant, RestaurantCreate};
pub use user::{User, UserCreate};
