//! Parsing of backend error bodies into user-facing messages.
//!
//! The CMS reports validation failures in one of two shapes under
//! `error.details.errors`: a list of `{ path, message }` objects or a
//! map of field name to message(s). Both are parsed structurally and
//! keyed on the backend field name; messages that do not match a known
//! shape pass through verbatim.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const GENERIC_SUBMIT_ERROR: &str = "Failed to submit form";

/// Remote write failure, surfaced to the user as `submit_error`
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to submit form")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Detailed(ErrorObject),
    Plain(String),
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: Option<String>,
    details: Option<ErrorDetails>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    errors: Option<ErrorList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorList {
    Paths(Vec<PathError>),
    Fields(BTreeMap<String, OneOrMany>),
}

#[derive(Debug, Deserialize)]
struct PathError {
    #[serde(default)]
    path: Vec<String>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Top-level message of an error body, if one is present in either the
/// plain-string or the object shape
pub fn top_level_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.error? {
        ErrorField::Plain(message) => Some(message),
        ErrorField::Detailed(object) => object.message,
    }
}

/// Human-readable label for a backend field name. Known fields map
/// through a fixed table; anything else is humanized generically.
pub fn field_label(name: &str) -> String {
    match name {
        "phone_number" => "Phone Number".to_string(),
        "maps_long_lat" => "Location Pin".to_string(),
        "email_address" => "Email".to_string(),
        "first_name" => "First Name".to_string(),
        "last_name" => "Last Name".to_string(),
        "property_address" => "Property Address".to_string(),
        other => humanize(other),
    }
}

/// Underscores to spaces, first letter of each word capitalized
fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn one backend message into its user-facing form. The yup
/// constraint phrase is the one recognized shape that gets rewritten;
/// everything else passes through verbatim, minus a leading repeat of
/// the raw field name.
fn friendly_reason(field: &str, message: &str) -> String {
    if message.contains("must match the following:") {
        return "has an invalid format".to_string();
    }
    let trimmed = message
        .strip_prefix(field)
        .map(str::trim_start)
        .unwrap_or(message);
    trimmed.to_string()
}

/// Compose the user-facing message for a rejected entity write.
/// Field-level errors win over the top-level message, which wins over
/// the generic fallback.
pub fn submission_error_message(body: &str) -> String {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

    let object = match parsed.and_then(|b| b.error) {
        Some(ErrorField::Plain(message)) => return message,
        Some(ErrorField::Detailed(object)) => object,
        None => return GENERIC_SUBMIT_ERROR.to_string(),
    };

    if let Some(errors) = object.details.and_then(|d| d.errors) {
        match errors {
            ErrorList::Paths(entries) if !entries.is_empty() => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        let field = entry
                            .path
                            .first()
                            .map(String::as_str)
                            .unwrap_or("unknown field");
                        format!(
                            "• {}: {}",
                            field_label(field),
                            friendly_reason(field, &entry.message)
                        )
                    })
                    .collect();
                return lines.join("\n");
            }
            ErrorList::Fields(map) if !map.is_empty() => {
                let parts: Vec<String> = map
                    .iter()
                    .map(|(field, messages)| {
                        let text = match messages {
                            OneOrMany::One(message) => message.clone(),
                            OneOrMany::Many(list) => list.join(", "),
                        };
                        format!("{}: {}", field_label(field), text)
                    })
                    .collect();
                return parts.join("; ");
            }
            _ => {}
        }
    }

    object
        .message
        .unwrap_or_else(|| GENERIC_SUBMIT_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_use_the_label_table() {
        assert_eq!(field_label("phone_number"), "Phone Number");
        assert_eq!(field_label("maps_long_lat"), "Location Pin");
        assert_eq!(field_label("email_address"), "Email");
    }

    #[test]
    fn unknown_fields_humanize_generically() {
        assert_eq!(field_label("building_permit_status"), "Building Permit Status");
        assert_eq!(field_label("tenure"), "Tenure");
    }

    #[test]
    fn path_errors_map_to_friendly_labels() {
        let body = r#"{"error":{"message":"ValidationError","details":{"errors":[
            {"path":["phone_number"],"message":"phone_number must match the following: \"/^\\+?[0-9]+$/\""}
        ]}}}"#;
        let message = submission_error_message(body);
        assert!(message.contains("Phone Number"));
        assert!(message.contains("has an invalid format"));
        assert!(!message.contains("/^"));
    }

    #[test]
    fn multiple_path_errors_join_as_lines() {
        let body = r#"{"error":{"details":{"errors":[
            {"path":["first_name"],"message":"first_name is a required field"},
            {"path":["email_address"],"message":"email_address must be a valid email"}
        ]}}}"#;
        let message = submission_error_message(body);
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("First Name"));
        assert!(lines[1].contains("Email"));
    }

    #[test]
    fn unrecognized_messages_pass_through_verbatim() {
        let body = r#"{"error":{"details":{"errors":[
            {"path":["land_size"],"message":"must be a positive integer"}
        ]}}}"#;
        let message = submission_error_message(body);
        assert_eq!(message, "• Land Size: must be a positive integer");
    }

    #[test]
    fn field_map_errors_join_with_semicolons() {
        let body = r#"{"error":{"details":{"errors":{
            "phone_number":["too short","digits only"],
            "tenure":"is not a valid choice"
        }}}}"#;
        let message = submission_error_message(body);
        assert!(message.contains("Phone Number: too short, digits only"));
        assert!(message.contains("Tenure: is not a valid choice"));
        assert!(message.contains("; "));
    }

    #[test]
    fn falls_back_to_top_level_message() {
        let body = r#"{"error":{"message":"Forbidden"}}"#;
        assert_eq!(submission_error_message(body), "Forbidden");
    }

    #[test]
    fn plain_string_error_passes_through() {
        let body = r#"{"error":"Service unavailable"}"#;
        assert_eq!(submission_error_message(body), "Service unavailable");
        assert_eq!(top_level_message(body).as_deref(), Some("Service unavailable"));
    }

    #[test]
    fn garbage_body_falls_back_to_generic() {
        assert_eq!(submission_error_message("<html>502</html>"), GENERIC_SUBMIT_ERROR);
        assert_eq!(submission_error_message(""), GENERIC_SUBMIT_ERROR);
        assert!(top_level_message("not json").is_none());
    }
}
