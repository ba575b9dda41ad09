use crate::form::FormModel;
use crate::models::Intent;
use crate::submit::errors::{submission_error_message, SubmitError};
use crate::submit::payload::{self, Envelope, ListingPayload};
use crate::upload::MediaUploader;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Seam in front of the entity-creation endpoints
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// POST the payload to the endpoint selected by intent. Success is
    /// any 2xx; the echoed entity body is not inspected further.
    async fn create_listing(
        &self,
        intent: Intent,
        payload: &ListingPayload,
    ) -> Result<(), SubmitError>;
}

/// Client for the CMS entity endpoints (one per intent)
pub struct StrapiApi {
    client: Client,
    sale_url: String,
    rent_url: String,
    auth_token: String,
}

impl StrapiApi {
    pub fn new(
        sale_url: impl Into<String>,
        rent_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, sale_url, rent_url, auth_token))
    }

    pub fn with_client(
        client: Client,
        sale_url: impl Into<String>,
        rent_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            sale_url: sale_url.into(),
            rent_url: rent_url.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[async_trait]
impl ListingApi for StrapiApi {
    async fn create_listing(
        &self,
        intent: Intent,
        payload: &ListingPayload,
    ) -> Result<(), SubmitError> {
        let endpoint = match intent {
            Intent::Sale => &self.sale_url,
            Intent::Rent => &self.rent_url,
        };

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.auth_token)
            .json(&Envelope { data: payload })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(?intent, "Listing accepted by the backend");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Listing rejected by the backend");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: submission_error_message(&body),
        })
    }
}

/// How a submit attempt ended. The status flags on the model carry the
/// same information for the view; this lets callers branch directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Terminal success; the form shows the confirmation view
    Submitted,
    /// A submit or upload was already in flight; nothing happened
    Blocked,
    /// Local validation failed; nothing was sent
    Invalid,
    /// Media upload failed; the entity write was never attempted
    UploadFailed,
    /// The backend refused the entity write
    Rejected,
}

/// Drives the full submit sequence: validate, upload media, build the
/// payload, write the entity, and fold the outcome back into the
/// model's status flags.
pub struct SubmissionController {
    uploader: Box<dyn MediaUploader>,
    api: Box<dyn ListingApi>,
}

impl SubmissionController {
    pub fn new(uploader: Box<dyn MediaUploader>, api: Box<dyn ListingApi>) -> Self {
        Self { uploader, api }
    }

    /// Run one submit attempt to completion. Strictly sequential, no
    /// retries, no cancellation; the in-flight flags are cleared on
    /// every exit path.
    pub async fn submit(&self, model: &mut FormModel) -> SubmitOutcome {
        if model.status.is_submitting || model.status.is_uploading {
            return SubmitOutcome::Blocked;
        }

        let validation = model.validate();
        if !validation.is_valid {
            let combined = validation
                .errors
                .into_iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("; ");
            model.status.submit_error = Some(combined);
            return SubmitOutcome::Invalid;
        }

        model.status.submit_error = None;
        model.status.is_submitting = true;

        let refs = if model.data.villa_photos.is_empty() {
            Vec::new()
        } else {
            model.status.is_uploading = true;
            model.status.upload_progress = 0;
            let uploaded = self.uploader.upload(&model.data.villa_photos).await;
            model.status.is_uploading = false;
            match uploaded {
                Ok(refs) => {
                    model.status.upload_progress = 100;
                    refs
                }
                Err(err) => {
                    model.status.is_submitting = false;
                    model.status.submit_error = Some(err.to_string());
                    return SubmitOutcome::UploadFailed;
                }
            }
        };

        let payload = payload::build(&model.data, model.intent, &refs);
        let written = self.api.create_listing(model.intent, &payload).await;
        model.status.is_submitting = false;

        match written {
            Ok(()) => {
                model.status.is_submitted = true;
                model.status.submit_error = None;
                model.status.submitted_at = Some(Utc::now());
                SubmitOutcome::Submitted
            }
            Err(err) => {
                model.status.submit_error = Some(err.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    /// Acknowledge the terminal success view and start over.
    ///
    /// Delegates to [`FormModel::reset`]; it lives here so the view
    /// drives the whole submission lifecycle through one controller
    /// entry point rather than reaching into the model for this one
    /// transition.
    pub fn reset_form(&self, model: &mut FormModel) {
        model.reset();
    }
}
