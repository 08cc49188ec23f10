//! Asynchronous enrichment lookups
//!
//! Two remote endpoints enrich the form draft: PAN verification (validity
//! plus an optional resolved name) and postcode detail lookup (candidate
//! cities and states). Both are plain request/response calls — no retries,
//! no caching, each invocation independent. Results are ephemeral; nothing
//! from this module is ever persisted.

pub mod http;

pub use http::HttpLookupClient;

use crate::core::error::LookupError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a PAN verification call.
///
/// Unknown response fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanVerification {
    pub is_valid: bool,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// One candidate entry in a postcode lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupOption {
    pub code: String,
    pub name: String,
}

/// Outcome of a postcode detail lookup: candidate cities and states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostcodeDetails {
    #[serde(default)]
    pub city: Vec<LookupOption>,
    #[serde(default)]
    pub state: Vec<LookupOption>,
}

/// The two enrichment lookups, behind a trait so the form controller can
/// be driven by a scripted double in tests.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Verify a PAN. The caller decides whether to surface or swallow
    /// failures.
    async fn verify_pan(&self, pan: &str) -> Result<PanVerification, LookupError>;

    /// Resolve candidate cities and states for a postcode.
    async fn postcode_details(&self, postcode: &str) -> Result<PostcodeDetails, LookupError>;
}
