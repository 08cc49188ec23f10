//! Customer record types — the data model persisted by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of addresses a single customer may hold.
pub const MAX_ADDRESSES: usize = 10;

/// Unique identifier for a customer record.
///
/// Ids are integers derived from the creation timestamp (milliseconds),
/// bumped past the last issued id when the clock has not advanced, so two
/// successive creates always get distinct, increasing ids. Immutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored customer record.
///
/// Serialized with camelCase field names (`fullName`, `addressLine1`, …) so
/// the persisted collection matches the documented external shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub pan: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub addresses: Vec<Address>,
}

/// Customer fields without an id — the store's input type.
///
/// The store assigns the id on `create` and pins it on `update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub pan: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub addresses: Vec<Address>,
}

impl Customer {
    /// Combine store-assigned id and submitted details into a record.
    pub fn from_details(id: CustomerId, details: CustomerDetails) -> Self {
        Self {
            id,
            pan: details.pan,
            full_name: details.full_name,
            email: details.email,
            mobile: details.mobile,
            addresses: details.addresses,
        }
    }
}

impl From<Customer> for CustomerDetails {
    fn from(customer: Customer) -> Self {
        Self {
            pan: customer.pan,
            full_name: customer.full_name,
            email: customer.email,
            mobile: customer.mobile,
            addresses: customer.addresses,
        }
    }
}

/// An address embedded in a customer record. No independent id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: String,
    /// Optional second line; empty string when absent.
    #[serde(default)]
    pub address_line2: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
}

impl Address {
    /// An empty address, as appended by the form's "add address" action.
    pub fn blank() -> Self {
        Self::default()
    }
}
