use serde::{Deserialize, Serialize};

use lectern_store::RecordId;

use crate::forms::{self, FormData, FormErrors};

/// A book classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Canonical locator for a genre record.
pub fn genre_url(id: RecordId) -> String {
    format!("/genre/{id}")
}

/// Sanitized form echo used to (re-)render the genre form.
#[derive(Debug, Clone, Default)]
pub struct GenreForm {
    pub name: String,
}

impl GenreForm {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }

    /// Normalize, validate, and sanitize raw form input.
    pub fn parse(data: &FormData) -> (Self, Result<Genre, FormErrors>) {
        let mut errors = FormErrors::new();

        let name = forms::required_text(
            &mut errors,
            "name",
            data.value("name"),
            "Genre name required",
        );

        let form = Self { name: name.clone() };
        let result = if errors.is_empty() {
            Ok(Genre { name })
        } else {
            Err(errors)
        };

        (form, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrorKind;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::from(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn name_is_trimmed_and_escaped() {
        let (form, parsed) = GenreForm::parse(&data(&[("name", "  Sword & Sorcery  ")]));
        let genre = parsed.unwrap();
        assert_eq!(genre.name, "Sword &amp; Sorcery");
        assert_eq!(form.name, genre.name);
    }

    #[test]
    fn empty_name_is_required_error() {
        let (_, parsed) = GenreForm::parse(&data(&[("name", "   ")]));
        let errors = parsed.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.field("name").unwrap().kind, FieldErrorKind::Required);
        assert_eq!(errors.field("name").unwrap().message, "Genre name required");
    }
}
