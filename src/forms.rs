//! Form input normalization and validation.
//!
//! Browsers submit `application/x-www-form-urlencoded` bodies in which a
//! field may appear zero, one, or many times. [`FormData`] keeps the raw
//! ordered pairs and normalizes multi-valued access at the boundary, so the
//! rest of the pipeline only ever sees a fixed shape. The validators collect
//! a complete error list rather than stopping at the first failure, and
//! sanitize (trim + escape) whether or not validation passed.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

/// Lexical form accepted by the optional date fields.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Raw form input as ordered `(name, value)` pairs.
#[derive(Debug, Clone, Default)]
pub struct FormData(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormData {
    /// First submitted value for the field, or the empty string when absent.
    pub fn value(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Every submitted value for the field, in submission order.
    ///
    /// Absent fields normalize to an empty list and a single scalar to a
    /// one-element list, so checkbox groups always present as a list.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// Classification of a field-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Format,
    InvalidDate,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Ordered, complete list of field-level failures for one submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, kind: FieldErrorKind, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == name)
    }
}

/// Escape markup-significant characters.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Validate a required text field against the raw value, then sanitize.
pub fn required_text(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, FieldErrorKind::Required, message);
    }
    escape(trimmed)
}

/// Validate a required alphanumeric-only name field, then sanitize.
pub fn required_name(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    empty_message: &str,
    format_message: &str,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, FieldErrorKind::Required, empty_message);
    } else if !trimmed.chars().all(char::is_alphanumeric) {
        errors.push(field, FieldErrorKind::Format, format_message);
    }
    escape(trimmed)
}

/// Validate an optional calendar date field.
///
/// Returns the sanitized lexical echo (for re-rendering the form) and the
/// parsed date. Absent or blank input is valid and normalizes to no date.
pub fn optional_date(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> (String, Option<Date>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (String::new(), None);
    }
    match Date::parse(trimmed, DATE_FORMAT) {
        Ok(date) => (escape(trimmed), Some(date)),
        Err(_) => {
            errors.push(field, FieldErrorKind::InvalidDate, message);
            (escape(trimmed), None)
        }
    }
}

/// ISO echo of a stored date for form prefill.
pub fn date_input_value(date: Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
