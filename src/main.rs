use anyhow::{bail, Context, Result};
use listing_courier::config::Settings;
use listing_courier::form::FormModel;
use listing_courier::models::{FormState, Intent, MediaFile};
use listing_courier::submit::{StrapiApi, SubmissionController, SubmitOutcome};
use listing_courier::upload::FileUploadClient;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_subscriber;

/// On-disk form description: intent plus the field values, with media
/// given as file paths to attach
#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default)]
    intent: Intent,
    form: FormState,
    #[serde(default)]
    media: Vec<String>,
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Courier - property listing submitter");

    let form_path = std::env::args()
        .nth(1)
        .context("Usage: listing-courier <form.json>")?;

    let settings = Settings::new().context("Failed to load settings")?;

    let raw = tokio::fs::read_to_string(&form_path)
        .await
        .with_context(|| format!("Failed to read {}", form_path))?;
    let form_file: FormFile =
        serde_json::from_str(&raw).context("Failed to parse the form file")?;

    let mut model = FormModel::new();
    model.intent = form_file.intent;
    model.data = form_file.form;

    // Attach media from disk; rejected files are reported, not fatal
    let mut candidates = Vec::new();
    for entry in &form_file.media {
        let path = Path::new(entry);
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read media file {}", entry))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(entry)
            .to_string();
        candidates.push(MediaFile::new(name, content_type_for(path), data));
    }
    for rejection in model.add_files(candidates) {
        warn!("Rejected: {}", rejection);
    }

    info!(
        "Submitting {} listing with {} media file(s)...",
        match model.intent {
            Intent::Rent => "rental",
            Intent::Sale => "sale",
        },
        model.data.villa_photos.len()
    );

    let uploader = FileUploadClient::new(&settings.upload_url, &settings.auth_token)?;
    let api = StrapiApi::new(&settings.sale_url, &settings.rent_url, &settings.auth_token)?;
    let controller = SubmissionController::new(Box::new(uploader), Box::new(api));

    match controller.submit(&mut model).await {
        SubmitOutcome::Submitted => {
            if let Some(at) = model.status.submitted_at {
                info!("✅ Listing submitted at {}", at.to_rfc3339());
            }
            Ok(())
        }
        outcome => {
            let message = model
                .status
                .submit_error
                .unwrap_or_else(|| "Submission did not complete".to_string());
            bail!("Submission failed ({:?}):\n{}", outcome, message)
        }
    }
}
