use serde::{Deserialize, Serialize};

use lectern_store::{Doc, ParseIdError, RecordId};

use crate::forms::{self, FormData, FormErrors};
use crate::modules::genre::models::Genre;

/// A catalogued work. Copies of it are tracked separately as book instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: RecordId,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<RecordId>,
}

/// Canonical locator for a book record.
pub fn book_url(id: RecordId) -> String {
    format!("/book/{id}")
}

/// Sanitized form echo used to (re-)render the book form. Reference fields
/// stay in their string form here so a failed submission can be re-rendered
/// exactly as the user sent it.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<String>,
}

impl BookForm {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefill from an existing record for the update form.
    pub fn from_record(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Normalize, validate, and sanitize raw form input.
    ///
    /// The genre field may arrive absent, once, or repeated; it is
    /// normalized to a list before anything else looks at it. Reference
    /// values that are lexically invalid identifiers surface as
    /// [`ParseIdError`], not as field errors: they cannot be produced by the
    /// rendered form.
    pub fn parse(data: &FormData) -> Result<(Self, Result<Book, FormErrors>), ParseIdError> {
        let mut errors = FormErrors::new();

        let title = forms::required_text(
            &mut errors,
            "title",
            data.value("title"),
            "Title must not be empty.",
        );
        let author = forms::required_text(
            &mut errors,
            "author",
            data.value("author"),
            "Author must not be empty.",
        );
        let summary = forms::required_text(
            &mut errors,
            "summary",
            data.value("summary"),
            "Summary must not be empty.",
        );
        let isbn = forms::required_text(
            &mut errors,
            "isbn",
            data.value("isbn"),
            "ISBN must not be empty",
        );
        let genre: Vec<String> = data
            .values("genre")
            .into_iter()
            .map(|value| forms::escape(value.trim()))
            .collect();

        let form = Self {
            title,
            author,
            summary,
            isbn,
            genre,
        };

        let result = if errors.is_empty() {
            let author_id: RecordId = form.author.parse()?;
            let genre_ids = form
                .genre
                .iter()
                .map(|value| value.parse())
                .collect::<Result<Vec<RecordId>, ParseIdError>>()?;
            Ok(Book {
                title: form.title.clone(),
                author: author_id,
                summary: form.summary.clone(),
                isbn: form.isbn.clone(),
                genre: genre_ids,
            })
        } else {
            Err(errors)
        };

        Ok((form, result))
    }
}

/// A genre option on the book form, flagged when it is part of the current
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreOption {
    pub id: RecordId,
    pub name: String,
    pub checked: bool,
}

/// Flag each genre option that appears in the selection.
///
/// Selections may come from a submitted form or from a stored record, so the
/// comparison is by canonical identifier string, never by object identity.
pub fn mark_genres(genres: &[Doc<Genre>], selected: &[String]) -> Vec<GenreOption> {
    genres
        .iter()
        .map(|doc| {
            let canonical = doc.id.to_string();
            GenreOption {
                id: doc.id,
                name: doc.body.name.clone(),
                checked: selected.iter().any(|value| *value == canonical),
            }
        })
        .collect()
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

    fn genre_doc(name: &str) -> Doc<Genre> {
        Doc {
            id: RecordId::generate(),
            body: Genre {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn absent_genre_field_becomes_an_empty_list() {
        let author = RecordId::generate();
        let (_, parsed) = BookForm::parse(&data(&[
            ("title", "Dune"),
            ("author", &author.to_string()),
            ("summary", "Spice"),
            ("isbn", "9780441172719"),
        ]))
        .unwrap();

        assert!(parsed.unwrap().genre.is_empty());
    }

    #[test]
    fn scalar_genre_becomes_a_single_element_list() {
        let author = RecordId::generate();
        let genre = RecordId::generate();
        let (form, parsed) = BookForm::parse(&data(&[
            ("title", "Dune"),
            ("author", &author.to_string()),
            ("summary", "Spice"),
            ("isbn", "9780441172719"),
            ("genre", &genre.to_string()),
        ]))
        .unwrap();

        assert_eq!(form.genre.len(), 1);
        assert_eq!(parsed.unwrap().genre, [genre]);
    }

    #[test]
    fn repeated_genres_pass_through_in_order() {
        let author = RecordId::generate();
        let g1 = RecordId::generate();
        let g2 = RecordId::generate();
        let (_, parsed) = BookForm::parse(&data(&[
            ("title", "Dune"),
            ("author", &author.to_string()),
            ("genre", &g1.to_string()),
            ("summary", "Spice"),
            ("isbn", "9780441172719"),
            ("genre", &g2.to_string()),
        ]))
        .unwrap();

        assert_eq!(parsed.unwrap().genre, [g1, g2]);
    }

    #[test]
    fn every_missing_required_field_is_reported() {
        let (_, parsed) = BookForm::parse(&data(&[("title", "Dune")])).unwrap();

        let errors = parsed.unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["author", "summary", "isbn"]);
        assert!(errors
            .iter()
            .all(|e| e.kind == FieldErrorKind::Required));
    }

    #[test]
    fn tampered_author_reference_is_an_identifier_error() {
        let result = BookForm::parse(&data(&[
            ("title", "Dune"),
            ("author", "not-an-id"),
            ("summary", "Spice"),
            ("isbn", "9780441172719"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn only_selected_options_are_flagged() {
        let options = [genre_doc("Fantasy"), genre_doc("Fiction"), genre_doc("Horror")];
        let selected = vec![options[1].id.to_string()];

        let marked = mark_genres(&options, &selected);

        assert!(!marked[0].checked);
        assert!(marked[1].checked);
        assert!(!marked[2].checked);
    }

    #[test]
    fn marking_ignores_unknown_selection_values() {
        let options = [genre_doc("Fantasy")];
        let selected = vec!["something-else".to_string()];

        let marked = mark_genres(&options, &selected);
        assert!(!marked[0].checked);
    }
}
