//! The editable customer draft
//!
//! A draft mirrors one customer record plus the ephemeral state the form
//! needs: per-address candidate sets from postcode lookups and per-address
//! busy bookkeeping. Addresses carry a stable `Uuid` key so that results of
//! in-flight lookups can find their target after the list was reordered or
//! an entry was removed — positional indexes are never used as identity.

use crate::core::customer::{Address, Customer, CustomerDetails};
use crate::lookup::LookupOption;
use uuid::Uuid;

/// One address entry in the draft.
#[derive(Debug, Clone)]
pub struct AddressDraft {
    key: Uuid,
    pub address_line1: String,
    pub address_line2: String,
    pub(crate) postcode: String,
    pub city: String,
    pub state: String,
    /// Candidate cities from the last postcode lookup for this entry.
    pub city_options: Vec<LookupOption>,
    /// Candidate states from the last postcode lookup for this entry.
    pub state_options: Vec<LookupOption>,
    pub(crate) loading_postcode: bool,
    pub(crate) postcode_seq: u64,
}

impl AddressDraft {
    /// A blank entry, as appended by the "add address" action.
    pub fn blank() -> Self {
        Self {
            key: Uuid::new_v4(),
            address_line1: String::new(),
            address_line2: String::new(),
            postcode: String::new(),
            city: String::new(),
            state: String::new(),
            city_options: Vec::new(),
            state_options: Vec::new(),
            loading_postcode: false,
            postcode_seq: 0,
        }
    }

    fn from_address(address: &Address) -> Self {
        Self {
            key: Uuid::new_v4(),
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone(),
            postcode: address.postcode.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            city_options: Vec::new(),
            state_options: Vec::new(),
            loading_postcode: false,
            postcode_seq: 0,
        }
    }

    /// Stable identity of this entry for the lifetime of the draft.
    pub fn key(&self) -> Uuid {
        self.key
    }

    /// Current postcode field value.
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Whether a postcode lookup for this entry is in flight.
    pub fn is_loading_postcode(&self) -> bool {
        self.loading_postcode
    }

    fn to_address(&self) -> Address {
        Address {
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
            postcode: self.postcode.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

/// The draft of one customer record under edit.
#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub(crate) pan: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub addresses: Vec<AddressDraft>,
}

impl CustomerDraft {
    /// A fresh draft: empty fields and a single blank address.
    pub fn blank() -> Self {
        Self {
            pan: String::new(),
            full_name: String::new(),
            email: String::new(),
            mobile: String::new(),
            addresses: vec![AddressDraft::blank()],
        }
    }

    /// A draft seeded from an existing record.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            pan: customer.pan.clone(),
            full_name: customer.full_name.clone(),
            email: customer.email.clone(),
            mobile: customer.mobile.clone(),
            addresses: customer.addresses.iter().map(AddressDraft::from_address).collect(),
        }
    }

    /// Current PAN field value.
    pub fn pan(&self) -> &str {
        &self.pan
    }

    /// Find an address entry by key.
    pub fn address(&self, key: Uuid) -> Option<&AddressDraft> {
        self.addresses.iter().find(|a| a.key == key)
    }

    pub(crate) fn address_mut(&mut self, key: Uuid) -> Option<&mut AddressDraft> {
        self.addresses.iter_mut().find(|a| a.key == key)
    }

    /// Snapshot the draft fields as store input.
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            pan: self.pan.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            addresses: self.addresses.iter().map(AddressDraft::to_address).collect(),
        }
    }
}
