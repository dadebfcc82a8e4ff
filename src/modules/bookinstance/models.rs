use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use lectern_store::{ParseIdError, RecordId};

use crate::forms::{self, FieldErrorKind, FormData, FormErrors};

/// Loan status of one physical copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Available,
        Status::Maintenance,
        Status::Loaned,
        Status::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Maintenance => "Maintenance",
            Status::Loaned => "Loaned",
            Status::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Status::Available),
            "Maintenance" => Ok(Status::Maintenance),
            "Loaned" => Ok(Status::Loaned),
            "Reserved" => Ok(Status::Reserved),
            _ => Err(()),
        }
    }
}

/// One physical copy of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInstance {
    pub book: RecordId,
    pub imprint: String,
    pub status: Status,
    pub due_back: Option<Date>,
}

/// Canonical locator for a book instance record.
pub fn bookinstance_url(id: RecordId) -> String {
    format!("/bookinstance/{id}")
}

/// Sanitized form echo used to (re-)render the book instance form.
#[derive(Debug, Clone, Default)]
pub struct BookInstanceForm {
    pub book: String,
    pub imprint: String,
    pub status: String,
    pub due_back: String,
}

impl BookInstanceForm {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(copy: &BookInstance) -> Self {
        Self {
            book: copy.book.to_string(),
            imprint: copy.imprint.clone(),
            status: copy.status.to_string(),
            due_back: forms::date_input_value(copy.due_back),
        }
    }

    /// Normalize, validate, and sanitize raw form input.
    pub fn parse(
        data: &FormData,
    ) -> Result<(Self, Result<BookInstance, FormErrors>), ParseIdError> {
        let mut errors = FormErrors::new();

        let book = forms::required_text(
            &mut errors,
            "book",
            data.value("book"),
            "Book must be specified",
        );
        let imprint = forms::required_text(
            &mut errors,
            "imprint",
            data.value("imprint"),
            "Imprint must be specified",
        );

        let status_raw = data.value("status").trim();
        // An absent status falls back to the default, matching the stored
        // schema; only an unrecognized value is an error.
        let status = match status_raw.parse::<Status>() {
            Ok(status) => status,
            Err(()) if status_raw.is_empty() => Status::default(),
            Err(()) => {
                errors.push("status", FieldErrorKind::Format, "Invalid status");
                Status::default()
            }
        };

        let (due_echo, due_back) = forms::optional_date(
            &mut errors,
            "due_back",
            data.value("due_back"),
            "Invalid date",
        );

        let form = Self {
            book,
            imprint,
            status: forms::escape(status_raw),
            due_back: due_echo,
        };

        let result = if errors.is_empty() {
            let book_id: RecordId = form.book.parse()?;
            Ok(BookInstance {
                book: book_id,
                imprint: form.imprint.clone(),
                status,
                due_back,
            })
        } else {
            Err(errors)
        };

        Ok((form, result))
    }
}
