//! The application record and its submission payload.
//!
//! [`ApplicationRecord`] can only be built through validating constructors,
//! so every record held in memory satisfies the field rules below. The
//! [`NewApplication`] payload is what clients post; it carries `validator`
//! rules so failures are reported per field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::{CoreError, FieldError};

// ---------------------------------------------------------------------------
// Submission payload
// ---------------------------------------------------------------------------

/// Request body for submitting an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewApplication {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 3, max = 50, message = "college must be between 3 and 50 characters"))]
    pub college: String,

    #[validate(range(min = 0.0, max = 100.0, message = "score must be between 0 and 100"))]
    pub score: f64,
}

/// Keys accepted in a submission body.
const PAYLOAD_FIELDS: [&str; 3] = ["college", "name", "score"];

impl NewApplication {
    /// Build a payload from an already-parsed JSON body.
    ///
    /// Missing keys, wrongly typed values and unknown keys are all reported
    /// as field errors, together with any field rule violations.
    pub fn from_value(body: Value) -> Result<Self, CoreError> {
        let Value::Object(mut map) = body else {
            return Err(CoreError::Validation(
                "request body must be a JSON object".to_string(),
            ));
        };

        let mut errors: Vec<FieldError> = map
            .keys()
            .filter(|key| !PAYLOAD_FIELDS.contains(&key.as_str()))
            .map(|key| FieldError {
                field: key.clone(),
                code: "unknown".to_string(),
                message: format!("{key} is not allowed"),
            })
            .collect();

        let name = take_string(&mut map, "name", &mut errors);
        let college = take_string(&mut map, "college", &mut errors);
        let score = match map.remove("score") {
            None => {
                errors.push(missing("score"));
                None
            }
            Some(value) => {
                let score = value.as_f64();
                if score.is_none() {
                    errors.push(wrong_type("score", "a number"));
                }
                score
            }
        };

        let (Some(name), Some(college), Some(score)) = (name, college, score) else {
            errors.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(CoreError::InvalidFields(errors));
        };

        let payload = NewApplication {
            name,
            college,
            score,
        };
        if errors.is_empty() {
            payload.check()?;
            return Ok(payload);
        }

        // Only unknown keys so far; add any rule violations.
        if let Err(CoreError::InvalidFields(rule_errors)) = payload.check() {
            errors.extend(rule_errors);
        }
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(CoreError::InvalidFields(errors))
    }

    /// Check every field rule, collecting all failures.
    pub fn check(&self) -> Result<(), CoreError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errs) => field_errors(&errs),
        };

        // `range` lets NaN through.
        if !self.score.is_finite() && !errors.iter().any(|e| e.field == "score") {
            errors.push(FieldError {
                field: "score".to_string(),
                code: "finite".to_string(),
                message: "score must be a finite number".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(errors))
        }
    }

    /// Validate and convert into a record.
    pub fn into_record(self) -> Result<ApplicationRecord, CoreError> {
        self.check()?;
        Ok(ApplicationRecord {
            name: self.name,
            college: self.college,
            score: self.score,
        })
    }
}

fn take_string(
    map: &mut Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.remove(field) {
        None => {
            errors.push(missing(field));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(wrong_type(field, "a string"));
            None
        }
    }
}

fn missing(field: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        code: "required".to_string(),
        message: format!("{field} is required"),
    }
}

fn wrong_type(field: &str, expected: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        code: "type".to_string(),
        message: format!("{field} must be {expected}"),
    }
}

/// Flatten `validator` output into a stable, field-sorted list.
fn field_errors(errs: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errs
        .field_errors()
        .into_iter()
        .flat_map(|(field, list)| {
            list.iter().map(move |e| FieldError {
                field: field.to_string(),
                code: e.code.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A stored college application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationRecord {
    name: String,
    college: String,
    score: f64,
}

impl ApplicationRecord {
    pub fn new(
        name: impl Into<String>,
        college: impl Into<String>,
        score: f64,
    ) -> Result<Self, CoreError> {
        NewApplication {
            name: name.into(),
            college: college.into(),
            score,
        }
        .into_record()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn college(&self) -> &str {
        &self.college
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Fields a store can filter on by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    Name,
    College,
}

impl ApplicationField {
    /// Read this field's value from a record.
    pub fn value_of<'a>(&self, record: &'a ApplicationRecord) -> &'a str {
        match self {
            ApplicationField::Name => record.name(),
            ApplicationField::College => record.college(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationField::Name => "name",
            ApplicationField::College => "college",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
