//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── Unknown menu item ─── CoreError::UnknownItem ──┐            │
//! │         │                                                  │            │
//! │         ├── Order rejected ──── ValidationError ───────────┤            │
//! │         │                       (localized message)        ▼            │
//! │         ├── Bad config ──────── ConfigError ───────────► ApiError ──►   │
//! │         │                                                 printed as    │
//! │         └── Success ─────────────────────────────────────► JSON line    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session prints errors as
//! `{"code":"ORDER_REJECTED","message":"Por favor ingresa tu nombre"}`.

use combinado_core::{CoreError, Language, ValidationError};
use serde::Serialize;

use crate::state::ConfigError;

/// API error returned from commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Menu item does not exist
    NotFound,

    /// Input could not be understood
    ValidationError,

    /// Order blocked by an empty cart, missing name or missing address
    OrderRejected,

    /// Configuration or menu file problem
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates an order rejection with the customer-facing message.
    pub fn rejected(language: Language, reason: &ValidationError) -> Self {
        ApiError::new(ErrorCode::OrderRejected, language.rejection_message(reason))
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownItem(id) => ApiError::not_found("Item", &id),
            CoreError::InvalidChatLink { .. } => {
                tracing::error!("Chat link misconfigured: {}", err);
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
            CoreError::Validation(e) if e.is_order_rejection() => {
                ApiError::rejected(Language::default(), &e)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts config errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
