use crate::form::options;
use crate::models::{
    FormField, FormState, Intent, MediaFile, SelectOption, SubmissionStatus, REQUIRED_FIELDS,
};
use crate::upload::validator::{self, MAX_FILES};
use tracing::debug;

/// Validation rules that varied between deployments. The minimum photo
/// count is opt-in; `None` means photos are never required.
#[derive(Debug, Clone, Default)]
pub struct ValidationPolicy {
    pub min_photos: Option<usize>,
}

impl ValidationPolicy {
    /// The stricter observed variant: at least two photos
    pub fn strict() -> Self {
        Self { min_photos: Some(2) }
    }
}

/// Outcome of [`FormModel::validate`]: one `(field, message)` entry per
/// failing field, in declared field order. An empty list means valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<(String, String)>,
}

impl ValidationResult {
    /// Message for a failing field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }
}

/// The single owner of all mutable form state.
///
/// Everything the view needs (option lists, labels, the submit-disabled
/// guard) is derived from here; everything that changes state goes
/// through the operations below.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    pub intent: Intent,
    pub data: FormState,
    pub status: SubmissionStatus,
    policy: ValidationPolicy,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Merge a single field update; no other field is touched
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
    }

    /// Switch between rent and sale.
    ///
    /// Intent-dependent fields go back to their defaults and the media
    /// selection clears; contact and address fields survive. Switching
    /// into rent forces the rental duration to monthly.
    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
        if intent == Intent::Rent {
            self.data.rent_duration = "monthly".to_string();
        }
        self.data.tenure.clear();
        self.data.lease_years.clear();
        self.data.building_permits.clear();
        self.data.price.clear();
        self.data.managed_by_company.clear();
        self.data.company_name.clear();
        self.data.price_period = "monthly".to_string();
        self.data.villa_photos.clear();
        debug!(?intent, "Intent switched, dependent fields reset");
    }

    /// Check every required field is non-empty after trimming, plus the
    /// minimum photo count when the policy asks for one. Errors keep
    /// the declared field order, photos last.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in REQUIRED_FIELDS {
            if self.data.field(field).trim().is_empty() {
                errors.push((
                    field.name().to_string(),
                    format!("{} is required", field.name()),
                ));
            }
        }

        if let Some(min) = self.policy.min_photos {
            if self.data.villa_photos.len() < min {
                errors.push((
                    "photos".to_string(),
                    format!("At least {} photos are required", min),
                ));
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Run a batch of candidate files through the validator. Accepted
    /// files append to the selection, capped at [`MAX_FILES`]; each
    /// rejected file contributes one message without blocking the rest.
    pub fn add_files(&mut self, candidates: Vec<MediaFile>) -> Vec<String> {
        let mut rejections = Vec::new();

        for file in candidates {
            match validator::validate(&file) {
                Ok(()) => self.data.villa_photos.push(file),
                Err(reason) => rejections.push(format!("{}: {}", file.name, reason)),
            }
        }

        self.data.villa_photos.truncate(MAX_FILES);
        rejections
    }

    /// Drop the file at `index`, keeping the relative order of the rest
    pub fn remove_file(&mut self, index: usize) {
        if index < self.data.villa_photos.len() {
            self.data.villa_photos.remove(index);
        }
    }

    /// Submit is blocked while any required field is blank or while a
    /// submit or upload is already in flight
    pub fn is_submit_disabled(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .any(|f| self.data.field(*f).trim().is_empty())
            || self.status.is_submitting
            || self.status.is_uploading
    }

    /// Back to a pristine form: defaults, rent intent, no status flags.
    /// Called from the terminal success view.
    pub fn reset(&mut self) {
        self.data = FormState::default();
        self.intent = Intent::Rent;
        self.status = SubmissionStatus::default();
    }

    // Derived view data

    pub fn property_type_options(&self) -> Vec<SelectOption> {
        options::property_type_options(self.intent)
    }

    pub fn tenure_options(&self) -> Vec<SelectOption> {
        options::tenure_options(self.intent)
    }

    pub fn price_label(&self) -> &'static str {
        options::price_label(self.intent)
    }

    pub fn tenure_label(&self) -> &'static str {
        options::tenure_label(self.intent)
    }
}
