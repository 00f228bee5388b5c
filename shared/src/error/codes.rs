//! Unified error codes for the Comanda platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Restaurant (tenant) errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Account is disabled
    AccountDisabled = 1003,
    /// API key is invalid or revoked
    ApiKeyInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 3xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 3001,
    /// Restaurant is disabled
    RestaurantDisabled = 3002,
    /// Restaurant slug already taken
    SlugTaken = 3003,
    /// Email already registered
    EmailTaken = 3004,
    /// Subscription plan limit reached
    PlanLimitReached = 3005,
    /// Restaurant still has dependent records
    RestaurantHasOrders = 3006,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Dine-in order requires a table
    TableRequired = 4002,
    /// Order submission contained no products
    EmptySelection = 4003,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price is invalid
    PriceInvalid = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid email or password",
            Self::AccountDisabled => "Account is disabled",
            Self::ApiKeyInvalid => "API key is invalid",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",

            Self::RestaurantNotFound => "Restaurant not found",
            Self::RestaurantDisabled => "Restaurant is disabled",
            Self::SlugTaken => "A restaurant with that name already exists",
            Self::EmailTaken => "Email already registered",
            Self::PlanLimitReached => "Subscription plan limit reached",
            Self::RestaurantHasOrders => "Restaurant still has orders",

            Self::OrderNotFound => "Order not found",
            Self::TableRequired => "Dine-in orders require a table number",
            Self::EmptySelection => "No products selected",

            Self::ProductNotFound => "Product not found",
            Self::PriceInvalid => "Product price is invalid",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed | Self::InvalidRequest | Self::TableRequired
            | Self::EmptySelection | Self::PriceInvalid => StatusCode::BAD_REQUEST,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::AccountDisabled
            | Self::ApiKeyInvalid => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied | Self::AdminRequired | Self::RestaurantDisabled => {
                StatusCode::FORBIDDEN
            }

            Self::NotFound
            | Self::RestaurantNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::SlugTaken | Self::EmailTaken
            | Self::RestaurantHasOrders => StatusCode::CONFLICT,

            Self::PlanLimitReached => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this code represents success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::AccountDisabled,
            1004 => Self::ApiKeyInvalid,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            3001 => Self::RestaurantNotFound,
            3002 => Self::RestaurantDisabled,
            3003 => Self::SlugTaken,
            3004 => Self::EmailTaken,
            3005 => Self::PlanLimitReached,
            3006 => Self::RestaurantHasOrders,
            4001 => Self::OrderNotFound,
            4002 => Self::TableRequired,
            4003 => Self::EmptySelection,
            6001 => Self::ProductNotFound,
            6002 => Self::PriceInvalid,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::TableRequired,
            ErrorCode::ProductNotFound,
            ErrorCode::DatabaseError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
        assert!(ErrorCode::try_from(4999).is_err());
    }

    #[test]
    fn tenant_mismatch_maps_to_not_found_status() {
        // Cross-tenant lookups must be indistinguishable from absent rows.
        assert_eq!(
            ErrorCode::ProductNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
    }
}
