use crate::models::{FileRef, MediaFile};
use crate::submit::errors::top_level_message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Upload failure, fatal to the current submit attempt.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to upload files")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid upload response")]
    MalformedResponse,
}

/// Seam in front of the media store, so the submission flow can be
/// driven with an in-memory fake in tests
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload a batch of already-validated files. Returns one reference
    /// per file, in submission order.
    async fn upload(&self, files: &[MediaFile]) -> Result<Vec<FileRef>, UploadError>;
}

/// One entry of the upload endpoint's success response; everything
/// beyond the identifier is ignored
#[derive(Debug, Deserialize)]
struct UploadedFile {
    id: i64,
}

/// Interpret the success body of an upload. The store must answer a
/// JSON list with one identified entry per submitted file, in order;
/// anything else is a malformed response.
fn parse_upload_response(body: &str, expected: usize) -> Result<Vec<FileRef>, UploadError> {
    let uploaded: Vec<UploadedFile> =
        serde_json::from_str(body).map_err(|_| UploadError::MalformedResponse)?;

    if uploaded.is_empty() || uploaded.len() != expected {
        return Err(UploadError::MalformedResponse);
    }

    Ok(uploaded.into_iter().map(|f| FileRef(f.id)).collect())
}

/// Client for the CMS media-upload endpoint
pub struct FileUploadClient {
    client: Client,
    upload_url: String,
    auth_token: String,
}

impl FileUploadClient {
    pub fn new(upload_url: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upload_url: upload_url.into(),
            auth_token: auth_token.into(),
        })
    }

    /// Reuse an existing client (shared with the submission API)
    pub fn with_client(client: Client, upload_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[async_trait]
impl MediaUploader for FileUploadClient {
    async fn upload(&self, files: &[MediaFile]) -> Result<Vec<FileRef>, UploadError> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.data.clone())
                .file_name(file.name.clone())
                .mime_str(&file.content_type)?;
            form = form.part("files", part);
        }

        info!("Uploading {} media file(s)", files.len());

        let response = self
            .client
            .post(&self.upload_url)
            .bearer_auth(&self.auth_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Upload endpoint rejected the batch");
            let message = top_level_message(&body)
                .unwrap_or_else(|| "Failed to upload files".to_string());
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let refs = parse_upload_response(&body, files.len())?;
        debug!(?refs, "Upload complete");
        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_one_ref_per_file_parses_in_order() {
        let body = r#"[{"id":41,"url":"/a.jpg"},{"id":42,"url":"/b.jpg"}]"#;
        let refs = parse_upload_response(body, 2).unwrap();
        assert_eq!(refs, vec![FileRef(41), FileRef(42)]);
    }

    #[test]
    fn empty_response_is_malformed() {
        let result = parse_upload_response("[]", 0);
        assert!(matches!(result, Err(UploadError::MalformedResponse)));
    }

    #[test]
    fn fewer_refs_than_submitted_files_is_malformed() {
        let body = r#"[{"id":41}]"#;
        let result = parse_upload_response(body, 2);
        assert!(matches!(result, Err(UploadError::MalformedResponse)));
    }

    #[test]
    fn entry_without_an_identifier_is_malformed() {
        let body = r#"[{"id":41},{"url":"/b.jpg"}]"#;
        let result = parse_upload_response(body, 2);
        assert!(matches!(result, Err(UploadError::MalformedResponse)));
    }

    #[test]
    fn non_list_response_is_malformed() {
        for body in ["{\"id\":41}", "\"ok\"", "not json"] {
            let result = parse_upload_response(body, 1);
            assert!(matches!(result, Err(UploadError::MalformedResponse)));
        }
    }
}
