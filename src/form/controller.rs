//! The form controller
//!
//! Orchestrates one customer draft: field edits, the two asynchronous
//! enrichment side effects, address list editing, and the final submit to
//! the record store.
//!
//! # Lookup sequencing
//!
//! Edits to the PAN field and to an address's postcode field hand back a
//! *probe* when the new value matches the field's pattern. The caller runs
//! the lookup for the probe (usually via [`FormController::verify_pan`] /
//! [`FormController::lookup_postcode`]) and the completion is applied
//! through the matching `apply_*` method. Each probe is stamped with the
//! field's sequence number at issue time; a completion whose stamp no
//! longer matches is discarded, so the last issued request always wins.
//! Postcode probes additionally carry the address's stable key — a result
//! for an address that was removed while the call was in flight finds no
//! target and is dropped instead of landing on whatever entry now occupies
//! the old position.
//!
//! Lookup failures are never surfaced: the busy flag clears, a diagnostic
//! is logged and the draft stays as the user left it.

use crate::core::customer::{Customer, CustomerId, MAX_ADDRESSES};
use crate::core::error::{FormError, LookupError, StoreError};
use crate::core::field::FieldFormat;
use crate::core::validation::validate_details;
use crate::form::draft::{AddressDraft, CustomerDraft};
use crate::lookup::{LookupService, PanVerification, PostcodeDetails};
use crate::store::CustomerStore;
use std::sync::Arc;
use uuid::Uuid;

/// Token for an in-flight PAN verification.
#[derive(Debug, Clone)]
pub struct PanProbe {
    pan: String,
    seq: u64,
}

impl PanProbe {
    /// The PAN value the lookup was issued for.
    pub fn pan(&self) -> &str {
        &self.pan
    }
}

/// Token for an in-flight postcode lookup, tied to one address entry.
#[derive(Debug, Clone)]
pub struct PostcodeProbe {
    key: Uuid,
    postcode: String,
    seq: u64,
}

impl PostcodeProbe {
    /// Key of the address entry the lookup targets.
    pub fn key(&self) -> Uuid {
        self.key
    }

    /// The postcode value the lookup was issued for.
    pub fn postcode(&self) -> &str {
        &self.postcode
    }
}

/// Controller over one customer draft.
pub struct FormController {
    store: Arc<CustomerStore>,
    lookup: Arc<dyn LookupService>,
    draft: CustomerDraft,
    editing: Option<CustomerId>,
    verifying_pan: bool,
    pan_seq: u64,
    pan_verification: Option<PanVerification>,
}

impl FormController {
    /// Start a creation session: blank draft with one empty address.
    pub fn start(store: Arc<CustomerStore>, lookup: Arc<dyn LookupService>) -> Self {
        Self {
            store,
            lookup,
            draft: CustomerDraft::blank(),
            editing: None,
            verifying_pan: false,
            pan_seq: 0,
            pan_verification: None,
        }
    }

    /// Start an edit session seeded from the record with `id`.
    ///
    /// Fails with `StoreError::NotFound` when no such record exists, so a
    /// caller can never hold an edit session for a missing id.
    pub fn edit(
        store: Arc<CustomerStore>,
        lookup: Arc<dyn LookupService>,
        id: CustomerId,
    ) -> Result<Self, StoreError> {
        let customer = store.get(id).ok_or(StoreError::NotFound { id })?;
        Ok(Self {
            store,
            lookup,
            draft: CustomerDraft::from_customer(&customer),
            editing: Some(id),
            verifying_pan: false,
            pan_seq: 0,
            pan_verification: None,
        })
    }

    /// The id under edit, if this session targets an existing record.
    pub fn editing(&self) -> Option<CustomerId> {
        self.editing
    }

    /// Read access to the draft.
    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    /// Whether a PAN verification is in flight.
    pub fn is_verifying_pan(&self) -> bool {
        self.verifying_pan
    }

    /// Outcome of the most recent PAN verification, if any completed for
    /// the current field value.
    pub fn pan_verification(&self) -> Option<&PanVerification> {
        self.pan_verification.as_ref()
    }

    // -----------------------------------------------------------------
    // Plain field edits
    // -----------------------------------------------------------------

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_mobile(&mut self, value: impl Into<String>) {
        self.draft.mobile = value.into();
    }

    pub fn set_address_line1(&mut self, key: Uuid, value: impl Into<String>) -> Result<(), FormError> {
        self.address_mut(key)?.address_line1 = value.into();
        Ok(())
    }

    pub fn set_address_line2(&mut self, key: Uuid, value: impl Into<String>) -> Result<(), FormError> {
        self.address_mut(key)?.address_line2 = value.into();
        Ok(())
    }

    /// Pick a city for an address, usually from its candidate set.
    pub fn set_city(&mut self, key: Uuid, value: impl Into<String>) -> Result<(), FormError> {
        self.address_mut(key)?.city = value.into();
        Ok(())
    }

    /// Pick a state for an address, usually from its candidate set.
    pub fn set_state(&mut self, key: Uuid, value: impl Into<String>) -> Result<(), FormError> {
        self.address_mut(key)?.state = value.into();
        Ok(())
    }

    fn address_mut(&mut self, key: Uuid) -> Result<&mut AddressDraft, FormError> {
        self.draft
            .address_mut(key)
            .ok_or(FormError::UnknownAddress { key })
    }

    // -----------------------------------------------------------------
    // PAN side effect
    // -----------------------------------------------------------------

    /// Record a PAN field edit.
    ///
    /// Every edit invalidates whatever verification is still in flight.
    /// A probe is returned only when the new value matches the PAN
    /// pattern; run it with [`FormController::verify_pan`].
    pub fn pan_changed(&mut self, value: impl Into<String>) -> Option<PanProbe> {
        self.draft.pan = value.into();
        self.pan_seq += 1;
        self.pan_verification = None;

        if FieldFormat::Pan.matches(&self.draft.pan) {
            self.verifying_pan = true;
            Some(PanProbe {
                pan: self.draft.pan.clone(),
                seq: self.pan_seq,
            })
        } else {
            self.verifying_pan = false;
            None
        }
    }

    /// Apply the completion of a PAN verification.
    ///
    /// Stale probes (the field was edited after the request was issued)
    /// are discarded. On a valid result carrying a resolved name the full
    /// name field is overwritten; failures leave the draft unchanged.
    pub fn apply_pan_verification(
        &mut self,
        probe: &PanProbe,
        outcome: Result<PanVerification, LookupError>,
    ) {
        if probe.seq != self.pan_seq {
            tracing::debug!(pan = %probe.pan, "discarding stale PAN verification");
            return;
        }
        self.verifying_pan = false;

        match outcome {
            Ok(verification) => {
                if verification.is_valid {
                    if let Some(name) = &verification.full_name {
                        self.draft.full_name = name.clone();
                    }
                }
                self.pan_verification = Some(verification);
            }
            Err(e) => {
                tracing::warn!(error = %e, pan = %probe.pan, "PAN verification failed");
            }
        }
    }

    /// Run a PAN probe against the lookup service and apply the outcome.
    pub async fn verify_pan(&mut self, probe: PanProbe) {
        let lookup = Arc::clone(&self.lookup);
        let outcome = lookup.verify_pan(&probe.pan).await;
        self.apply_pan_verification(&probe, outcome);
    }

    // -----------------------------------------------------------------
    // Postcode side effect
    // -----------------------------------------------------------------

    /// Record a postcode field edit on the address with `key`.
    ///
    /// Every edit invalidates the entry's in-flight lookup. A probe is
    /// returned only when the new value matches the 6-digit pattern; run
    /// it with [`FormController::lookup_postcode`].
    pub fn postcode_changed(
        &mut self,
        key: Uuid,
        value: impl Into<String>,
    ) -> Result<Option<PostcodeProbe>, FormError> {
        let address = self.address_mut(key)?;
        address.postcode = value.into();
        address.postcode_seq += 1;

        if FieldFormat::Postcode.matches(&address.postcode) {
            address.loading_postcode = true;
            Ok(Some(PostcodeProbe {
                key,
                postcode: address.postcode.clone(),
                seq: address.postcode_seq,
            }))
        } else {
            address.loading_postcode = false;
            Ok(None)
        }
    }

    /// Apply the completion of a postcode lookup.
    ///
    /// The result is dropped when the target address no longer exists or
    /// the entry's postcode was edited after the request was issued. On
    /// success the entry's city and state are set to the first candidate
    /// of each returned list (empty string when a list is empty) and the
    /// candidate sets are stored on the entry.
    pub fn apply_postcode_details(
        &mut self,
        probe: &PostcodeProbe,
        outcome: Result<PostcodeDetails, LookupError>,
    ) {
        let Some(address) = self.draft.address_mut(probe.key) else {
            tracing::debug!(postcode = %probe.postcode, "discarding postcode result for removed address");
            return;
        };
        if probe.seq != address.postcode_seq {
            tracing::debug!(postcode = %probe.postcode, "discarding stale postcode result");
            return;
        }
        address.loading_postcode = false;

        match outcome {
            Ok(details) => {
                address.city = details.city.first().map(|o| o.name.clone()).unwrap_or_default();
                address.state = details.state.first().map(|o| o.name.clone()).unwrap_or_default();
                address.city_options = details.city;
                address.state_options = details.state;
            }
            Err(e) => {
                tracing::warn!(error = %e, postcode = %probe.postcode, "postcode lookup failed");
            }
        }
    }

    /// Run a postcode probe against the lookup service and apply the
    /// outcome.
    pub async fn lookup_postcode(&mut self, probe: PostcodeProbe) {
        let lookup = Arc::clone(&self.lookup);
        let outcome = lookup.postcode_details(&probe.postcode).await;
        self.apply_postcode_details(&probe, outcome);
    }

    // -----------------------------------------------------------------
    // Address list editing
    // -----------------------------------------------------------------

    /// Append a blank address entry; rejected once the draft holds the
    /// maximum.
    pub fn add_address(&mut self) -> Result<Uuid, FormError> {
        if self.draft.addresses.len() >= MAX_ADDRESSES {
            return Err(FormError::AddressLimit { max: MAX_ADDRESSES });
        }
        let entry = AddressDraft::blank();
        let key = entry.key();
        self.draft.addresses.push(entry);
        Ok(key)
    }

    /// Remove the address entry with `key`; rejected when it is the last
    /// one remaining.
    pub fn remove_address(&mut self, key: Uuid) -> Result<(), FormError> {
        if self.draft.addresses.len() == 1 {
            return Err(FormError::LastAddress);
        }
        let position = self
            .draft
            .addresses
            .iter()
            .position(|a| a.key() == key)
            .ok_or(FormError::UnknownAddress { key })?;
        self.draft.addresses.remove(position);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Submit
    // -----------------------------------------------------------------

    /// Validate the draft and commit it to the store.
    ///
    /// A draft with any violated field makes no store call. A fresh draft
    /// creates a record; an edit session replaces the record it was seeded
    /// from. Returns the stored record so the caller can navigate away.
    pub fn submit(&mut self) -> Result<Customer, FormError> {
        let details = self.draft.details();
        validate_details(&details)?;

        let customer = match self.editing {
            Some(id) => self.store.update(id, details)?,
            None => self.store.create(details)?,
        };
        self.editing = Some(customer.id);
        Ok(customer)
    }
}
