//! List view controller
//!
//! Read side of the record collection: substring filtering by name and the
//! confirmed-delete flow. When the collection is empty the controller tells
//! the caller to redirect to the creation form instead of rendering an
//! empty list — including right after the last record was deleted.

use crate::core::customer::{Customer, CustomerId};
use crate::core::error::StoreError;
use crate::store::CustomerStore;
use std::sync::Arc;

/// What the list view should render.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// Records matching the current search term, original order.
    Customers(Vec<Customer>),
    /// The collection is empty; send the user to the creation form.
    RedirectToForm,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the record was removed.
    Deleted,
    /// The user declined; the store was not touched.
    Declined,
    /// No record with the requested id exists.
    Missing,
}

/// Collaborator that asks the user to confirm a destructive action.
///
/// Confirmation is mandatory: the store's delete is never called without a
/// positive answer.
pub trait ConfirmationPrompt {
    fn confirm_delete(&self, customer: &Customer) -> bool;
}

/// Controller for the customer list view.
pub struct ListController {
    store: Arc<CustomerStore>,
}

impl ListController {
    pub fn new(store: Arc<CustomerStore>) -> Self {
        Self { store }
    }

    /// Records whose full name contains `term`, case-insensitively. An
    /// empty term returns the whole collection in original order.
    pub fn filter(&self, term: &str) -> Vec<Customer> {
        let needle = term.to_lowercase();
        self.store
            .list()
            .into_iter()
            .filter(|c| c.full_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// What to render for the current search term.
    pub fn view(&self, term: &str) -> ListOutcome {
        if self.store.is_empty() {
            return ListOutcome::RedirectToForm;
        }
        ListOutcome::Customers(self.filter(term))
    }

    /// Ask for confirmation, then delete the record with `id`.
    pub fn request_delete(
        &self,
        id: CustomerId,
        prompt: &dyn ConfirmationPrompt,
    ) -> Result<DeleteOutcome, StoreError> {
        let Some(customer) = self.store.get(id) else {
            return Ok(DeleteOutcome::Missing);
        };
        if !prompt.confirm_delete(&customer) {
            return Ok(DeleteOutcome::Declined);
        }
        if self.store.delete(id)? {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::Missing)
        }
    }
}
