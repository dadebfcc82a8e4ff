use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use lectern_store::RecordId;

use crate::forms::{self, FormData, FormErrors};

const LIFESPAN_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// An author of one or more books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl Author {
    /// Display name, family name first.
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan string; absent dates render as empty segments.
    pub fn lifespan(&self) -> String {
        let mut out = String::new();
        if let Some(birth) = self.date_of_birth {
            out.push_str(&format_long(birth));
        }
        out.push_str(" - ");
        if let Some(death) = self.date_of_death {
            out.push_str(&format_long(death));
        }
        out
    }
}

fn format_long(date: Date) -> String {
    date.format(LIFESPAN_FORMAT).unwrap_or_default()
}

/// Canonical locator for an author record.
pub fn author_url(id: RecordId) -> String {
    format!("/author/{id}")
}

/// Sanitized form echo used to (re-)render the author form.
#[derive(Debug, Clone, Default)]
pub struct AuthorForm {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

impl AuthorForm {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefill from an existing record for the update form.
    pub fn from_record(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: forms::date_input_value(author.date_of_birth),
            date_of_death: forms::date_input_value(author.date_of_death),
        }
    }

    /// Normalize, validate, and sanitize raw form input.
    ///
    /// Always returns the sanitized echo for re-rendering; the candidate
    /// record is only built when validation produced no errors.
    pub fn parse(data: &FormData) -> (Self, Result<Author, FormErrors>) {
        let mut errors = FormErrors::new();

        let first_name = forms::required_name(
            &mut errors,
            "first_name",
            data.value("first_name"),
            "First name must be specified.",
            "First name has non-alphanumeric characters.",
        );
        let family_name = forms::required_name(
            &mut errors,
            "family_name",
            data.value("family_name"),
            "Family name must be specified.",
            "Family name has non-alphanumeric characters.",
        );
        let (birth_echo, date_of_birth) = forms::optional_date(
            &mut errors,
            "date_of_birth",
            data.value("date_of_birth"),
            "Invalid date of birth",
        );
        let (death_echo, date_of_death) = forms::optional_date(
            &mut errors,
            "date_of_death",
            data.value("date_of_death"),
            "Invalid date of death",
        );

        let form = Self {
            first_name: first_name.clone(),
            family_name: family_name.clone(),
            date_of_birth: birth_echo,
            date_of_death: death_echo,
        };

        let result = if errors.is_empty() {
            Ok(Author {
                first_name,
                family_name,
                date_of_birth,
                date_of_death,
            })
        } else {
            Err(errors)
        };

        (form, result)
    }
}
