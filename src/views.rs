//! Shared markup helpers.
//!
//! Rendering is a pure function from a view-model to markup; nothing here
//! touches the store. Entity field values are escaped when the form input is
//! sanitized, so the per-module views insert them as-is.

use axum::response::Html;

use crate::forms::FormErrors;

/// Wrap page content in the site chrome.
pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav>\n<ul>\n\
         <li><a href=\"/\">Home</a></li>\n\
         <li><a href=\"/books\">All books</a></li>\n\
         <li><a href=\"/authors\">All authors</a></li>\n\
         <li><a href=\"/genres\">All genres</a></li>\n\
         <li><a href=\"/bookinstances\">All book copies</a></li>\n\
         <li><a href=\"/author/create\">Create new author</a></li>\n\
         <li><a href=\"/genre/create\">Create new genre</a></li>\n\
         <li><a href=\"/book/create\">Create new book</a></li>\n\
         <li><a href=\"/bookinstance/create\">Create new book copy</a></li>\n\
         </ul>\n</nav>\n\
         <main>\n<h1>{title}</h1>\n{body}</main>\n</body>\n</html>\n"
    ))
}

/// Field error list shown above a re-rendered form. Empty when there is
/// nothing to report.
pub fn errors_list(errors: &FormErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li class=\"field-error\" data-field=\"{}\">{}</li>\n", e.field, e.message))
        .collect();
    format!("<ul class=\"errors\">\n{items}</ul>\n")
}

/// A labeled text input with a prefilled value.
pub fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n"
    )
}

/// A labeled date input with an ISO-formatted value.
pub fn date_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"date\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrorKind;

    #[test]
    fn empty_errors_render_nothing() {
        assert_eq!(errors_list(&FormErrors::new()), "");
    }

    #[test]
    fn errors_render_as_list_items() {
        let mut errors = FormErrors::new();
        errors.push("title", FieldErrorKind::Required, "Title must not be empty.");

        let html = errors_list(&errors);
        assert!(html.contains("Title must not be empty."));
        assert!(html.contains("data-field=\"title\""));
    }
}
