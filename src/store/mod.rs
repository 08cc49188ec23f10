//! The customer record store
//!
//! `CustomerStore` owns the durable collection of customer records. The
//! in-memory collection is the single source of truth for the lifetime of
//! the process: the storage slot is read exactly once at startup and every
//! successful mutation rewrites it synchronously before the call returns,
//! so the persisted payload always matches the in-memory collection.
//!
//! Records keep insertion order. `update` replaces a record in place;
//! `delete` shifts the remainder without reordering.

use crate::core::customer::{Customer, CustomerDetails, CustomerId};
use crate::core::error::{StorageError, StoreError};
use crate::storage::StorageSlot;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// The durable customer collection.
///
/// Cheap to share: wrap in an `Arc` and hand clones of that to the form and
/// list controllers.
pub struct CustomerStore {
    slot: Arc<dyn StorageSlot>,
    state: RwLock<StoreState>,
}

struct StoreState {
    customers: IndexMap<CustomerId, Customer>,
    last_id: i64,
}

impl CustomerStore {
    /// Open the store over a storage slot.
    ///
    /// The collection is loaded from the slot once. An empty slot, an
    /// unreadable slot or a payload that fails to parse all initialize an
    /// empty collection — opening never fails. Corruption is logged and
    /// the slot is rewritten on the next mutation.
    pub fn open(slot: Arc<dyn StorageSlot>) -> Self {
        let customers = match slot.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Customer>>(&payload) {
                Ok(records) => records.into_iter().map(|c| (c.id, c)).collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt customer collection");
                    IndexMap::new()
                }
            },
            Ok(None) => IndexMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "customer collection unreadable, starting empty");
                IndexMap::new()
            }
        };

        let last_id = customers.keys().map(|id| id.0).max().unwrap_or(0);

        Self {
            slot,
            state: RwLock::new(StoreState { customers, last_id }),
        }
    }

    /// All records, insertion order.
    pub fn list(&self) -> Vec<Customer> {
        let state = self.state.read().expect("customer store lock poisoned");
        state.customers.values().cloned().collect()
    }

    /// Fetch one record by id.
    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        let state = self.state.read().expect("customer store lock poisoned");
        state.customers.get(&id).cloned()
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        let state = self.state.read().expect("customer store lock poisoned");
        state.customers.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a record: assign a fresh unique id, append, persist.
    pub fn create(&self, details: CustomerDetails) -> Result<Customer, StoreError> {
        let mut state = self.state.write().expect("customer store lock poisoned");

        let id = next_id(state.last_id);
        let customer = Customer::from_details(id, details);

        let mut next = state.customers.clone();
        next.insert(id, customer.clone());
        self.persist(&next)?;

        state.customers = next;
        state.last_id = id.0;
        tracing::debug!(id = %id, "customer created");
        Ok(customer)
    }

    /// Replace the record with `id` in place, preserving its position.
    pub fn update(&self, id: CustomerId, details: CustomerDetails) -> Result<Customer, StoreError> {
        let mut state = self.state.write().expect("customer store lock poisoned");

        if !state.customers.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }

        let customer = Customer::from_details(id, details);
        let mut next = state.customers.clone();
        next.insert(id, customer.clone());
        self.persist(&next)?;

        state.customers = next;
        tracing::debug!(id = %id, "customer updated");
        Ok(customer)
    }

    /// Remove the record with `id` if present; returns whether a record
    /// was removed. Deleting an absent id leaves the slot untouched.
    pub fn delete(&self, id: CustomerId) -> Result<bool, StoreError> {
        let mut state = self.state.write().expect("customer store lock poisoned");

        if !state.customers.contains_key(&id) {
            return Ok(false);
        }

        let mut next = state.customers.clone();
        next.shift_remove(&id);
        self.persist(&next)?;

        state.customers = next;
        tracing::debug!(id = %id, "customer deleted");
        Ok(true)
    }

    fn persist(&self, customers: &IndexMap<CustomerId, Customer>) -> Result<(), StorageError> {
        let records: Vec<&Customer> = customers.values().collect();
        let payload = serde_json::to_string(&records).map_err(|e| StorageError::Serialize {
            message: e.to_string(),
        })?;
        self.slot.write(&payload)
    }
}

/// Allocate the next id: the creation timestamp in milliseconds, bumped
/// past the last issued id when the clock has not advanced.
fn next_id(last_id: i64) -> CustomerId {
    let candidate = Utc::now().timestamp_millis();
    CustomerId(candidate.max(last_id + 1))
}
