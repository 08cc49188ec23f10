//! HTTP implementation of the lookup service
//!
//! Speaks JSON over HTTPS to the two remote endpoints. Request shapes:
//! `{"panNumber": "..."}` for PAN verification, `{"postcode": "..."}` for
//! postcode details. A non-2xx answer maps to `LookupError::Remote`,
//! transport failures to `LookupError::Network`. Transport defaults apply;
//! there is no retry policy and no per-call timeout override.

use crate::config::LookupConfig;
use crate::core::error::LookupError;
use crate::lookup::{LookupService, PanVerification, PostcodeDetails};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Lookup client over the configured remote endpoints.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    http: reqwest::Client,
    pan_url: String,
    postcode_url: String,
}

impl HttpLookupClient {
    /// Build a client from configuration.
    pub fn new(config: &LookupConfig) -> Self {
        Self::from_urls(config.pan_url.clone(), config.postcode_url.clone())
    }

    /// Build a client against explicit endpoint URLs.
    pub fn from_urls(pan_url: impl Into<String>, postcode_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            pan_url: pan_url.into(),
            postcode_url: postcode_url.into(),
        }
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, LookupError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Remote {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| LookupError::Decode {
            message: e.to_string(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PanRequest<'a> {
    pan_number: &'a str,
}

#[derive(Serialize)]
struct PostcodeRequest<'a> {
    postcode: &'a str,
}

#[async_trait]
impl LookupService for HttpLookupClient {
    async fn verify_pan(&self, pan: &str) -> Result<PanVerification, LookupError> {
        self.post_json(&self.pan_url, &PanRequest { pan_number: pan })
            .await
    }

    async fn postcode_details(&self, postcode: &str) -> Result<PostcodeDetails, LookupError> {
        self.post_json(&self.postcode_url, &PostcodeRequest { postcode })
            .await
    }
}
