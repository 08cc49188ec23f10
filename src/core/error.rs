//! Typed error handling for the clientele crate
//!
//! This module provides the error type hierarchy used across the crate so
//! that callers can handle failures specifically rather than dealing with
//! generic boxed errors.
//!
//! # Error Categories
//!
//! - [`StoreError`]: Errors related to record store operations
//! - [`StorageError`]: Errors related to the durable storage slot
//! - [`LookupError`]: Errors related to the remote lookup endpoints
//! - [`ValidationError`]: Errors related to draft field validation
//! - [`FormError`]: Errors surfaced by the form controller
//! - [`ConfigError`]: Errors related to configuration loading
//!
//! None of these is fatal to the process. Lookup failures are swallowed by
//! the form controller with a logged diagnostic; corrupt persisted data is
//! recovered by resetting to an empty collection and never surfaces here.

use crate::core::customer::CustomerId;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the clientele crate
///
/// Each variant contains a more specific error type for that category.
#[derive(Debug)]
pub enum ClienteleError {
    /// Record store errors (CRUD operations)
    Store(StoreError),

    /// Durable storage slot errors
    Storage(StorageError),

    /// Remote lookup errors
    Lookup(LookupError),

    /// Draft validation errors
    Validation(ValidationError),

    /// Form controller errors
    Form(FormError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for ClienteleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClienteleError::Store(e) => write!(f, "{}", e),
            ClienteleError::Storage(e) => write!(f, "{}", e),
            ClienteleError::Lookup(e) => write!(f, "{}", e),
            ClienteleError::Validation(e) => write!(f, "{}", e),
            ClienteleError::Form(e) => write!(f, "{}", e),
            ClienteleError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClienteleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClienteleError::Store(e) => Some(e),
            ClienteleError::Storage(e) => Some(e),
            ClienteleError::Lookup(e) => Some(e),
            ClienteleError::Validation(e) => Some(e),
            ClienteleError::Form(e) => Some(e),
            ClienteleError::Config(e) => Some(e),
        }
    }
}

impl ClienteleError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ClienteleError::Store(e) => e.error_code(),
            ClienteleError::Storage(e) => e.error_code(),
            ClienteleError::Lookup(e) => e.error_code(),
            ClienteleError::Validation(_) => "VALIDATION_ERROR",
            ClienteleError::Form(e) => e.error_code(),
            ClienteleError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors related to record store operations
#[derive(Debug)]
pub enum StoreError {
    /// No record with the requested id exists
    NotFound {
        id: CustomerId,
    },

    /// Persisting the mutated collection failed
    Storage(StorageError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "customer with id '{}' not found", id)
            }
            StoreError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::NotFound { .. } => None,
            StoreError::Storage(e) => Some(e),
        }
    }
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "CUSTOMER_NOT_FOUND",
            StoreError::Storage(_) => "STORE_PERSIST_FAILED",
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

impl From<StoreError> for ClienteleError {
    fn from(err: StoreError) -> Self {
        ClienteleError::Store(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the durable storage slot
///
/// Note that a slot holding malformed data is not reported through this
/// type: corruption is recovered at load time by starting from an empty
/// collection.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the slot failed
    Io {
        message: String,
    },

    /// Encoding the collection for the slot failed
    Serialize {
        message: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { message } => write!(f, "storage io error: {}", message),
            StorageError::Serialize { message } => {
                write!(f, "failed to encode collection: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Serialize { .. } => "STORAGE_ENCODE_ERROR",
        }
    }
}

impl From<StorageError> for ClienteleError {
    fn from(err: StorageError) -> Self {
        ClienteleError::Storage(err)
    }
}

// =============================================================================
// Lookup Errors
// =============================================================================

/// Errors related to the remote lookup endpoints
///
/// The form controller swallows these: a failed lookup clears the busy flag,
/// logs a diagnostic and leaves the draft unchanged.
#[derive(Debug)]
pub enum LookupError {
    /// Transport-level failure before a response was received
    Network {
        message: String,
    },

    /// The endpoint answered with a non-2xx status
    Remote {
        status: u16,
    },

    /// The response body did not match the documented shape
    Decode {
        message: String,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Network { message } => write!(f, "lookup request failed: {}", message),
            LookupError::Remote { status } => {
                write!(f, "lookup endpoint answered with status {}", status)
            }
            LookupError::Decode { message } => {
                write!(f, "failed to decode lookup response: {}", message)
            }
        }
    }
}

impl std::error::Error for LookupError {}

impl LookupError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LookupError::Network { .. } => "LOOKUP_NETWORK_ERROR",
            LookupError::Remote { .. } => "LOOKUP_REMOTE_ERROR",
            LookupError::Decode { .. } => "LOOKUP_DECODE_ERROR",
        }
    }
}

impl From<LookupError> for ClienteleError {
    fn from(err: LookupError) -> Self {
        ClienteleError::Lookup(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to draft field validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError {
        field: String,
        message: String,
    },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ClienteleError {
    fn from(err: ValidationError) -> Self {
        ClienteleError::Validation(err)
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Errors surfaced by the form controller
#[derive(Debug)]
pub enum FormError {
    /// Submit rejected because the draft failed validation
    Validation(ValidationError),

    /// Submit reached the store and the store call failed
    Store(StoreError),

    /// Adding an address would exceed the maximum
    AddressLimit {
        max: usize,
    },

    /// Removing an address would leave the draft with none
    LastAddress,

    /// The referenced address does not exist in the draft
    UnknownAddress {
        key: Uuid,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Validation(e) => write!(f, "{}", e),
            FormError::Store(e) => write!(f, "{}", e),
            FormError::AddressLimit { max } => {
                write!(f, "a customer cannot hold more than {} addresses", max)
            }
            FormError::LastAddress => {
                write!(f, "a customer must keep at least one address")
            }
            FormError::UnknownAddress { key } => {
                write!(f, "no address with key '{}' in the draft", key)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Validation(e) => Some(e),
            FormError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl FormError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Validation(_) => "VALIDATION_ERROR",
            FormError::Store(e) => e.error_code(),
            FormError::AddressLimit { .. } => "ADDRESS_LIMIT_REACHED",
            FormError::LastAddress => "LAST_ADDRESS",
            FormError::UnknownAddress { .. } => "UNKNOWN_ADDRESS",
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}

impl From<StoreError> for FormError {
    fn from(err: StoreError) -> Self {
        FormError::Store(err)
    }
}

impl From<FormError> for ClienteleError {
    fn from(err: FormError) -> Self {
        ClienteleError::Form(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// IO error while reading the configuration file
    Io {
        path: String,
        message: String,
    },

    /// Failed to parse the configuration document
    Parse {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "failed to parse config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ClienteleError {
    fn from(err: ConfigError) -> Self {
        ClienteleError::Config(err)
    }
}
