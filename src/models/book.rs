//! Book model and write-payload validation.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{AppError, AppResult};

/// Fields every create/update body must carry, checked in this order
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "year"];

pub const JSON_REQUIRED: &str = "Request must contain JSON data";
pub const YEAR_INVALID: &str = "Year must be a valid integer";

/// A book held in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    /// Assigned by the server, never reused
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    pub fn new(id: u64, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            year: input.year,
        }
    }

    /// Replace content fields, keeping the identifier
    pub fn apply(&mut self, input: BookInput) {
        self.title = input.title;
        self.author = input.author;
        self.year = input.year;
    }
}

/// Validated create/update payload
#[derive(Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct BookInput {
    #[validate(custom(function = "not_blank", message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Author must not be empty"))]
    pub author: String,
    /// Integer, or a string holding an integer
    #[schema(example = 1960)]
    pub year: i32,
}

impl BookInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Parse and validate a raw JSON body.
    ///
    /// Presence of every required field is checked before any value is
    /// inspected, so a body missing `author` reports that even when `year`
    /// is also bad.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let fields = body
            .as_object()
            .ok_or_else(|| AppError::MalformedRequest(JSON_REQUIRED.to_string()))?;

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
            return Err(AppError::Validation(format!(
                "Missing required field: {}",
                missing
            )));
        }

        let year = parse_year(&fields["year"])?;
        let input = Self {
            title: text_field(fields, "title", "Title")?,
            author: text_field(fields, "author", "Author")?,
            year,
        };

        input.validate().map_err(first_violation)?;
        Ok(input)
    }
}

/// Coerce a JSON value into a year.
///
/// Accepts integers, finite floats (truncated toward zero) and strings
/// holding a decimal integer. Everything else is rejected, including
/// booleans and null.
pub fn parse_year(value: &Value) -> AppResult<i32> {
    let year = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else if n.is_u64() {
                // larger than i64::MAX
                None
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(f64::trunc)
                    .filter(|f| *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                    .map(|f| f as i32)
            }
        }
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    year.ok_or_else(|| AppError::Validation(YEAR_INVALID.to_string()))
}

fn text_field(fields: &Map<String, Value>, key: &str, label: &str) -> AppResult<String> {
    match &fields[key] {
        Value::String(s) => Ok(s.clone()),
        _ => Err(AppError::Validation(format!("{} must be a string", label))),
    }
}

/// Whitespace-only text counts as empty; the value itself is stored as sent
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn first_violation(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let message = [("title", "Title"), ("author", "Author")]
        .iter()
        .find_map(|(field, label)| {
            let err = field_errors.get(*field)?.first()?;
            Some(
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} must not be empty", label)),
            )
        })
        .unwrap_or_else(|| errors.to_string());
    AppError::Validation(message)
}
