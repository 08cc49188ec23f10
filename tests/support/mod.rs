//! Shared test harness for controller and store testing
//!
//! Provides a scripted `LookupService` double with call counters, sample
//! record builders, and canned confirmation prompts.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod support;
//! use support::*;
//! ```

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use clientele::prelude::{
    Address, ConfirmationPrompt, Customer, CustomerDetails, LookupError, LookupOption,
    LookupService, PanVerification, PostcodeDetails,
};

// ---------------------------------------------------------------------------
// ScriptedLookup — queue-driven LookupService double
// ---------------------------------------------------------------------------

/// A lookup double that answers from pre-queued responses, in order, and
/// counts how often each endpoint was called.
#[derive(Default)]
pub struct ScriptedLookup {
    pan_answers: Mutex<VecDeque<Result<PanVerification, LookupError>>>,
    postcode_answers: Mutex<VecDeque<Result<PostcodeDetails, LookupError>>>,
    pan_calls: AtomicUsize,
    postcode_calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_pan(&self, answer: Result<PanVerification, LookupError>) {
        self.pan_answers.lock().unwrap().push_back(answer);
    }

    pub fn queue_postcode(&self, answer: Result<PostcodeDetails, LookupError>) {
        self.postcode_answers.lock().unwrap().push_back(answer);
    }

    pub fn pan_calls(&self) -> usize {
        self.pan_calls.load(Ordering::SeqCst)
    }

    pub fn postcode_calls(&self) -> usize {
        self.postcode_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupService for ScriptedLookup {
    async fn verify_pan(&self, _pan: &str) -> Result<PanVerification, LookupError> {
        self.pan_calls.fetch_add(1, Ordering::SeqCst);
        self.pan_answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected PAN verification call")
    }

    async fn postcode_details(&self, _postcode: &str) -> Result<PostcodeDetails, LookupError> {
        self.postcode_calls.fetch_add(1, Ordering::SeqCst);
        self.postcode_answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected postcode lookup call")
    }
}

// ---------------------------------------------------------------------------
// Sample data builders
// ---------------------------------------------------------------------------

pub fn sample_address() -> Address {
    Address {
        address_line1: "12 MG Road".to_string(),
        address_line2: String::new(),
        postcode: "560001".to_string(),
        city: "Bangalore".to_string(),
        state: "Karnataka".to_string(),
    }
}

pub fn sample_details(name: &str) -> CustomerDetails {
    CustomerDetails {
        pan: "ABCDE1234F".to_string(),
        full_name: name.to_string(),
        email: "someone@example.com".to_string(),
        mobile: "9876543210".to_string(),
        addresses: vec![sample_address()],
    }
}

pub fn lookup_option(code: &str, name: &str) -> LookupOption {
    LookupOption {
        code: code.to_string(),
        name: name.to_string(),
    }
}

pub fn bangalore_details() -> PostcodeDetails {
    PostcodeDetails {
        city: vec![lookup_option("BLR", "Bangalore")],
        state: vec![lookup_option("KA", "Karnataka")],
    }
}

// ---------------------------------------------------------------------------
// Confirmation prompts
// ---------------------------------------------------------------------------

/// Prompt that always answers yes.
pub struct ConfirmAll;

impl ConfirmationPrompt for ConfirmAll {
    fn confirm_delete(&self, _customer: &Customer) -> bool {
        true
    }
}

/// Prompt that always answers no.
pub struct DeclineAll;

impl ConfirmationPrompt for DeclineAll {
    fn confirm_delete(&self, _customer: &Customer) -> bool {
        false
    }
}
