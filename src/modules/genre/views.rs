use axum::response::Html;

use lectern_store::Doc;

use crate::forms::FormErrors;
use crate::modules::book::models::{book_url, Book};
use crate::views;

use super::models::{genre_url, Genre, GenreForm};

pub fn genre_form(title: &str, form: &GenreForm, errors: &FormErrors) -> Html<String> {
    let body = format!(
        "{errors}<form method=\"post\">\n{name}\
         <button type=\"submit\">Submit</button>\n</form>\n",
        errors = views::errors_list(errors),
        name = views::text_input("Genre name:", "name", &form.name),
    );
    views::layout(title, &body)
}

pub fn genre_detail(genre: &Doc<Genre>, books: &[Doc<Book>]) -> Html<String> {
    let mut body = String::from("<h2>Books</h2>\n");
    if books.is_empty() {
        body.push_str("<p>This genre has no books.</p>\n");
    } else {
        body.push_str("<dl>\n");
        for book in books {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                book_url(book.id),
                book.body.title,
                book.body.summary
            ));
        }
        body.push_str("</dl>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{base}/update\">Update</a> | <a href=\"{base}/delete\">Delete</a></p>\n",
        base = genre_url(genre.id)
    ));
    views::layout(&genre.body.name, &body)
}

pub fn genre_delete(genre: &Doc<Genre>, books: &[Doc<Book>]) -> Html<String> {
    let mut body = String::new();
    if books.is_empty() {
        body.push_str(&format!(
            "<p>Do you really want to delete this genre?</p>\n\
             <p>{}</p>\n\
             <form method=\"post\" action=\"{}/delete\">\n\
             <button type=\"submit\">Delete</button>\n</form>\n",
            genre.body.name,
            genre_url(genre.id)
        ));
    } else {
        body.push_str(
            "<p>Delete the following books before attempting to delete this genre.</p>\n\
             <h2>Books</h2>\n<dl>\n",
        );
        for book in books {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                book_url(book.id),
                book.body.title,
                book.body.summary
            ));
        }
        body.push_str("</dl>\n");
    }
    views::layout("Delete Genre", &body)
}
