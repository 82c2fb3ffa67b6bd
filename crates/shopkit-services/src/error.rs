//! # Service Error Types
//!
//! Error types for collaborator-facing operations.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────────────────┐  ┌─────────────────────────────────┐  │
//! │  │  Configuration              │  │  Collaborators                  │  │
//! │  │                             │  │                                 │  │
//! │  │  InvalidConfig              │  │  Payment                        │  │
//! │  │  ConfigLoadFailed           │  │  Email                          │  │
//! │  │  ConfigSaveFailed           │  │  Collaborator                   │  │
//! │  └─────────────────────────────┘  └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A declined card is NOT an error: it comes back as a normal
//! `OrderOutcome { success: false, .. }`. The collaborator variants are for
//! collaborators that could not answer at all, and services pass them
//! through unchanged.

use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error type covering every service failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values are inconsistent.
    #[error("Invalid shop configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// The payment gateway could not process the request.
    #[error("Payment gateway error: {0}")]
    Payment(String),

    /// The mail transport could not deliver the message.
    #[error("Email delivery failed for {to}: {reason}")]
    Email { to: String, reason: String },

    /// Any other collaborator failure.
    #[error("{collaborator} failed: {reason}")]
    Collaborator {
        collaborator: &'static str,
        reason: String,
    },
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ServiceError {
    fn from(err: toml::ser::Error) -> Self {
        ServiceError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ServiceError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidConfig(_)
                | ServiceError::ConfigLoadFailed(_)
                | ServiceError::ConfigSaveFailed(_)
        )
    }

    /// Returns true if an external collaborator failed.
    pub fn is_collaborator_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Payment(_) | ServiceError::Email { .. } | ServiceError::Collaborator { .. }
        )
    }
}
