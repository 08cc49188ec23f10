//! # Clientele
//!
//! A small customer-record manager: a durable record store, two
//! asynchronous enrichment look-ups (PAN verification, postcode → city /
//! state resolution) and the controllers that tie them to a form and a
//! list view.
//!
//! ## Features
//!
//! - **Durable Record Store**: create / update / delete / list keyed by
//!   customer id, every mutation persisted synchronously to one storage
//!   slot
//! - **Crash-Safe Startup**: an empty or corrupt slot loads as an empty
//!   collection, never a failure
//! - **Async Enrichment**: PAN and postcode lookups over pluggable
//!   transport, gated by field format
//! - **Per-Address Sequencing**: in-flight lookups are keyed by stable
//!   address identity with last-request-wins semantics
//! - **Field Validation**: per-field messages, no store call for an
//!   invalid draft
//! - **Configuration-Based**: storage path and endpoint URLs via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clientele::prelude::*;
//!
//! let config = AppConfig::default();
//! let slot = Arc::new(FileSlot::new(&config.storage.path));
//! let store = Arc::new(CustomerStore::open(slot));
//! let lookup = Arc::new(HttpLookupClient::new(&config.lookup));
//!
//! // Fill in a draft and commit it.
//! let mut form = FormController::start(store.clone(), lookup);
//! if let Some(probe) = form.pan_changed("ABCDE1234F") {
//!     form.verify_pan(probe).await; // may overwrite the full name
//! }
//! form.set_email("asha@example.com");
//! form.set_mobile("9876543210");
//! let customer = form.submit()?;
//!
//! // Browse and delete.
//! let list = ListController::new(store);
//! let rows = list.filter("asha");
//! ```

pub mod config;
pub mod core;
pub mod form;
pub mod list;
pub mod lookup;
pub mod storage;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Data model ===
    pub use crate::core::{
        customer::{Address, Customer, CustomerDetails, CustomerId, MAX_ADDRESSES},
        field::FieldFormat,
        validation::validate_details,
    };

    // === Errors ===
    pub use crate::core::error::{
        ClienteleError, ConfigError, FieldValidationError, FormError, LookupError, StorageError,
        StoreError, ValidationError,
    };

    // === Store & storage ===
    pub use crate::storage::{FileSlot, MemorySlot, StorageSlot};
    pub use crate::store::CustomerStore;

    // === Lookups ===
    pub use crate::lookup::{
        HttpLookupClient, LookupOption, LookupService, PanVerification, PostcodeDetails,
    };

    // === Controllers ===
    pub use crate::form::{AddressDraft, CustomerDraft, FormController, PanProbe, PostcodeProbe};
    pub use crate::list::{ConfirmationPrompt, DeleteOutcome, ListController, ListOutcome};

    // === Config ===
    pub use crate::config::{AppConfig, LookupConfig, StorageConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
