use axum::response::Html;

use lectern_store::Doc;

use crate::forms::FormErrors;
use crate::modules::author::models::{author_url, Author};
use crate::modules::bookinstance::models::{bookinstance_url, BookInstance};
use crate::modules::genre::models::{genre_url, Genre};
use crate::views;

use super::models::{book_url, Book, BookForm, GenreOption};

pub fn book_form(
    title: &str,
    form: &BookForm,
    authors: &[Doc<Author>],
    genres: &[GenreOption],
    errors: &FormErrors,
) -> Html<String> {
    let mut author_options = String::new();
    for author in authors {
        let value = author.id.to_string();
        let selected = if value == form.author { " selected" } else { "" };
        author_options.push_str(&format!(
            "<option value=\"{value}\"{selected}>{}</option>\n",
            author.body.name()
        ));
    }

    let mut genre_boxes = String::new();
    for option in genres {
        let checked = if option.checked { " checked" } else { "" };
        genre_boxes.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"genre\" value=\"{}\"{checked}> {}</label>\n",
            option.id, option.name
        ));
    }

    let body = format!(
        "{errors}<form method=\"post\">\n\
         {title_input}\
         <p><label for=\"author\">Author:</label> <select id=\"author\" name=\"author\">\n\
         <option value=\"\">--Please select an author--</option>\n{author_options}</select></p>\n\
         <p><label for=\"summary\">Summary:</label> \
         <textarea id=\"summary\" name=\"summary\">{summary}</textarea></p>\n\
         {isbn_input}\
         <fieldset><legend>Genre</legend>\n{genre_boxes}</fieldset>\n\
         <button type=\"submit\">Submit</button>\n</form>\n",
        errors = views::errors_list(errors),
        title_input = views::text_input("Title:", "title", &form.title),
        summary = form.summary,
        isbn_input = views::text_input("ISBN:", "isbn", &form.isbn),
    );
    views::layout(title, &body)
}

pub fn book_detail(
    book: &Doc<Book>,
    author: Option<&Doc<Author>>,
    genres: &[Doc<Genre>],
    copies: &[Doc<BookInstance>],
) -> Html<String> {
    let mut body = String::new();
    if let Some(author) = author {
        body.push_str(&format!(
            "<p>Author: <a href=\"{}\">{}</a></p>\n",
            author_url(author.id),
            author.body.name()
        ));
    }
    body.push_str(&format!("<p>Summary: {}</p>\n", book.body.summary));
    body.push_str(&format!("<p>ISBN: {}</p>\n", book.body.isbn));
    if !genres.is_empty() {
        let links: Vec<String> = genres
            .iter()
            .map(|g| format!("<a href=\"{}\">{}</a>", genre_url(g.id), g.body.name))
            .collect();
        body.push_str(&format!("<p>Genre: {}</p>\n", links.join(", ")));
    }

    body.push_str("<h2>Copies</h2>\n");
    if copies.is_empty() {
        body.push_str("<p>There are no copies of this book in the library.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for copy in copies {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a> ({})</li>\n",
                bookinstance_url(copy.id),
                copy.body.imprint,
                copy.body.status
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{base}/update\">Update</a> | <a href=\"{base}/delete\">Delete</a></p>\n",
        base = book_url(book.id)
    ));
    views::layout(&book.body.title, &body)
}

pub fn book_delete(book: &Doc<Book>, copies: &[Doc<BookInstance>]) -> Html<String> {
    let mut body = String::new();
    if copies.is_empty() {
        body.push_str(&format!(
            "<p>Do you really want to delete this book?</p>\n\
             <p>{}</p>\n\
             <form method=\"post\" action=\"{}/delete\">\n\
             <button type=\"submit\">Delete</button>\n</form>\n",
            book.body.title,
            book_url(book.id)
        ));
    } else {
        body.push_str(
            "<p>Delete the following copies before attempting to delete this book.</p>\n\
             <h2>Copies</h2>\n<ul>\n",
        );
        for copy in copies {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a> ({})</li>\n",
                bookinstance_url(copy.id),
                copy.body.imprint,
                copy.body.status
            ));
        }
        body.push_str("</ul>\n");
    }
    views::layout("Delete Book", &body)
}
