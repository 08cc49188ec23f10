//! Integration tests for the form controller: lookup gating, draft
//! enrichment, validation and the submit paths into the store.

mod support;

use clientele::prelude::*;
use support::*;

fn fresh_store() -> Arc<CustomerStore> {
    Arc::new(CustomerStore::open(Arc::new(MemorySlot::new())))
}

#[tokio::test]
async fn create_flow_fills_draft_and_stores_record() {
    let store = fresh_store();
    let lookup = Arc::new(ScriptedLookup::new());
    lookup.queue_pan(Ok(PanVerification {
        is_valid: true,
        full_name: Some("Asha Rao".to_string()),
    }));
    lookup.queue_postcode(Ok(bangalore_details()));

    let mut form = FormController::start(store.clone(), lookup.clone());

    let probe = form.pan_changed("ABCDE1234F").expect("pattern matches");
    form.verify_pan(probe).await;
    assert_eq!(form.draft().full_name, "Asha Rao");

    form.set_email("asha@example.com");
    form.set_mobile("9876543210");

    let key = form.draft().addresses[0].key();
    form.set_address_line1(key, "12 MG Road").unwrap();
    let probe = form
        .postcode_changed(key, "560001")
        .unwrap()
        .expect("pattern matches");
    form.lookup_postcode(probe).await;

    let customer = form.submit().unwrap();
    assert_eq!(customer.full_name, "Asha Rao");
    assert_eq!(customer.addresses[0].city, "Bangalore");
    assert_eq!(customer.addresses[0].state, "Karnataka");

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(customer.id).unwrap(), customer);
    assert_eq!(lookup.pan_calls(), 1);
    assert_eq!(lookup.postcode_calls(), 1);
}

#[tokio::test]
async fn invalid_field_formats_never_reach_the_lookup() {
    let store = fresh_store();
    let lookup = Arc::new(ScriptedLookup::new());
    let mut form = FormController::start(store, lookup.clone());

    assert!(form.pan_changed("abc").is_none());
    assert!(form.pan_changed("ABCDE1234").is_none());

    let key = form.draft().addresses[0].key();
    assert!(form.postcode_changed(key, "12").unwrap().is_none());
    assert!(form.postcode_changed(key, "56000a").unwrap().is_none());

    assert_eq!(lookup.pan_calls(), 0);
    assert_eq!(lookup.postcode_calls(), 0);
}

#[tokio::test]
async fn lookup_failures_leave_draft_untouched() {
    let store = fresh_store();
    let lookup = Arc::new(ScriptedLookup::new());
    lookup.queue_pan(Err(LookupError::Network {
        message: "connection refused".to_string(),
    }));
    lookup.queue_postcode(Err(LookupError::Remote { status: 502 }));

    let mut form = FormController::start(store, lookup);
    form.set_full_name("Typed By Hand");

    let probe = form.pan_changed("ABCDE1234F").unwrap();
    form.verify_pan(probe).await;
    assert_eq!(form.draft().full_name, "Typed By Hand");
    assert!(!form.is_verifying_pan());

    let key = form.draft().addresses[0].key();
    let probe = form.postcode_changed(key, "560001").unwrap().unwrap();
    form.lookup_postcode(probe).await;

    let address = form.draft().address(key).unwrap();
    assert_eq!(address.city, "");
    assert_eq!(address.state, "");
    assert!(!address.is_loading_postcode());
}

#[tokio::test]
async fn empty_candidate_lists_populate_empty_strings() {
    let store = fresh_store();
    let lookup = Arc::new(ScriptedLookup::new());
    lookup.queue_postcode(Ok(PostcodeDetails::default()));

    let mut form = FormController::start(store, lookup);
    let key = form.draft().addresses[0].key();

    let probe = form.postcode_changed(key, "560001").unwrap().unwrap();
    form.lookup_postcode(probe).await;

    let address = form.draft().address(key).unwrap();
    assert_eq!(address.city, "");
    assert_eq!(address.state, "");
    assert!(address.city_options.is_empty());
}

#[test]
fn submit_with_violations_makes_no_store_call() {
    let store = fresh_store();
    let mut form = FormController::start(store.clone(), Arc::new(ScriptedLookup::new()));

    form.pan_changed("bad");
    form.set_email("not-an-email");

    let err = form.submit().unwrap_err();
    let FormError::Validation(ValidationError::FieldErrors(errors)) = err else {
        panic!("expected field errors");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"pan"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"mobile"));
    assert!(store.is_empty());
}

#[test]
fn resubmitting_after_create_updates_instead_of_duplicating() {
    let store = fresh_store();
    let mut form = FormController::start(store.clone(), Arc::new(ScriptedLookup::new()));

    form.pan_changed("ABCDE1234F");
    form.set_full_name("Asha Rao");
    form.set_email("asha@example.com");
    form.set_mobile("9876543210");
    let key = form.draft().addresses[0].key();
    form.set_address_line1(key, "12 MG Road").unwrap();
    form.postcode_changed(key, "560001").unwrap();

    let first = form.submit().unwrap();
    form.set_mobile("9000000001");
    let second = form.submit().unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(first.id).unwrap().mobile, "9000000001");
}

#[test]
fn edit_session_replaces_record_in_place() {
    let store = fresh_store();
    store.create(sample_details("First")).unwrap();
    let target = store.create(sample_details("Second")).unwrap();
    store.create(sample_details("Third")).unwrap();

    let mut form =
        FormController::edit(store.clone(), Arc::new(ScriptedLookup::new()), target.id).unwrap();
    assert_eq!(form.editing(), Some(target.id));
    assert_eq!(form.draft().pan(), "ABCDE1234F");

    form.set_full_name("Second Renamed");
    let updated = form.submit().unwrap();
    assert_eq!(updated.id, target.id);

    let names: Vec<String> = store.list().into_iter().map(|c| c.full_name).collect();
    assert_eq!(names, vec!["First", "Second Renamed", "Third"]);
}

#[test]
fn edit_session_for_missing_id_is_refused() {
    let store = fresh_store();
    let result = FormController::edit(store, Arc::new(ScriptedLookup::new()), CustomerId(404));
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn lookups_on_two_addresses_do_not_cross_talk() {
    let store = fresh_store();
    let lookup = Arc::new(ScriptedLookup::new());
    lookup.queue_postcode(Ok(bangalore_details()));
    lookup.queue_postcode(Ok(PostcodeDetails {
        city: vec![lookup_option("DEL", "New Delhi")],
        state: vec![lookup_option("DL", "Delhi")],
    }));

    let mut form = FormController::start(store, lookup);
    let first = form.draft().addresses[0].key();
    let second = form.add_address().unwrap();

    // Both probes issued before either completion is applied.
    let probe_a = form.postcode_changed(first, "560001").unwrap().unwrap();
    let probe_b = form.postcode_changed(second, "110001").unwrap().unwrap();
    assert!(form.draft().address(first).unwrap().is_loading_postcode());
    assert!(form.draft().address(second).unwrap().is_loading_postcode());

    form.lookup_postcode(probe_a).await;
    form.lookup_postcode(probe_b).await;

    assert_eq!(form.draft().address(first).unwrap().city, "Bangalore");
    assert_eq!(form.draft().address(second).unwrap().city, "New Delhi");
}

#[test]
fn address_editing_limits_are_enforced() {
    let store = fresh_store();
    let mut form = FormController::start(store, Arc::new(ScriptedLookup::new()));

    let mut keys = vec![form.draft().addresses[0].key()];
    for _ in 1..MAX_ADDRESSES {
        keys.push(form.add_address().unwrap());
    }
    assert!(matches!(
        form.add_address(),
        Err(FormError::AddressLimit { .. })
    ));

    for key in keys.drain(1..) {
        form.remove_address(key).unwrap();
    }
    assert!(matches!(
        form.remove_address(keys[0]),
        Err(FormError::LastAddress)
    ));
    assert_eq!(form.draft().addresses.len(), 1);
}
