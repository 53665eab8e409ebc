//! Inbound request body and its validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DATE_FORMAT_MESSAGE: &str = "Created date must be an ISO-8601 date (YYYY-MM-DD)";

/// Body of `POST /score` as sent by the caller. Every field is optional here
/// so missing values surface as field errors instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_after: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidScoreRequest {
    pub language: String,
    pub created_after: NaiveDate,
}

/// One rejected field and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ScoreRequest {
    /// Validates a raw JSON body. A field of the wrong JSON type is reported
    /// under its own name rather than failing the whole body.
    pub fn from_json(body: Value) -> Result<ValidScoreRequest, Vec<FieldError>> {
        let Value::Object(mut fields) = body else {
            return Err(vec![FieldError::new(
                "body",
                "Request body must be a JSON object",
            )]);
        };

        let mut type_errors = Vec::new();
        let request = ScoreRequest {
            created_after: string_field(
                &mut fields,
                "createdAfter",
                DATE_FORMAT_MESSAGE,
                &mut type_errors,
            ),
            language: string_field(
                &mut fields,
                "language",
                "Language must be a string",
                &mut type_errors,
            ),
        };

        request.validate().map_err(|errors| {
            errors
                .into_iter()
                .map(|e| {
                    type_errors
                        .iter()
                        .find(|t| t.field == e.field)
                        .cloned()
                        .unwrap_or(e)
                })
                .collect()
        })
    }

    /// Checks every field and reports all problems at once, `createdAfter`
    /// first.
    pub fn validate(self) -> Result<ValidScoreRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let created_after = match self.created_after.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::new("createdAfter", "Created date is required"));
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new("createdAfter", DATE_FORMAT_MESSAGE));
                    None
                }
            },
        };

        let language = match self.language.as_deref().map(str::trim) {
            Some(language) if !language.is_empty() => Some(language.to_string()),
            _ => {
                errors.push(FieldError::new("language", "Language is required"));
                None
            }
        };

        match (language, created_after) {
            (Some(language), Some(created_after)) if errors.is_empty() => Ok(ValidScoreRequest {
                language,
                created_after,
            }),
            _ => Err(errors),
        }
    }
}

/// Takes `name` out of `fields`; `null` counts as absent.
fn string_field(
    fields: &mut Map<String, Value>,
    name: &str,
    type_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.remove(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(name, type_message));
            None
        }
    }
}
