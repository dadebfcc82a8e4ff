use axum::response::Html;

use lectern_store::Doc;

use crate::forms::FormErrors;
use crate::modules::book::models::{book_url, Book};
use crate::views;

use super::models::{bookinstance_url, BookInstance, BookInstanceForm, Status};

pub fn bookinstance_form(
    title: &str,
    form: &BookInstanceForm,
    books: &[Doc<Book>],
    errors: &FormErrors,
) -> Html<String> {
    let mut book_options = String::new();
    for book in books {
        let value = book.id.to_string();
        let selected = if value == form.book { " selected" } else { "" };
        book_options.push_str(&format!(
            "<option value=\"{value}\"{selected}>{}</option>\n",
            book.body.title
        ));
    }

    let mut status_options = String::new();
    for status in Status::ALL {
        let selected = if status.as_str() == form.status {
            " selected"
        } else {
            ""
        };
        status_options.push_str(&format!(
            "<option value=\"{status}\"{selected}>{status}</option>\n"
        ));
    }

    let body = format!(
        "{errors}<form method=\"post\">\n\
         <p><label for=\"book\">Book:</label> <select id=\"book\" name=\"book\">\n\
         <option value=\"\">--Please select a book--</option>\n{book_options}</select></p>\n\
         {imprint}\
         <p><label for=\"status\">Status:</label> <select id=\"status\" name=\"status\">\n\
         {status_options}</select></p>\n\
         {due_back}\
         <button type=\"submit\">Submit</button>\n</form>\n",
        errors = views::errors_list(errors),
        imprint = views::text_input("Imprint:", "imprint", &form.imprint),
        due_back = views::date_input("Date when book available:", "due_back", &form.due_back),
    );
    views::layout(title, &body)
}

pub fn bookinstance_detail(copy: &Doc<BookInstance>, book: Option<&Doc<Book>>) -> Html<String> {
    let mut body = String::new();
    if let Some(book) = book {
        body.push_str(&format!(
            "<p>Book: <a href=\"{}\">{}</a></p>\n",
            book_url(book.id),
            book.body.title
        ));
    }
    body.push_str(&format!("<p>Imprint: {}</p>\n", copy.body.imprint));
    body.push_str(&format!("<p>Status: {}</p>\n", copy.body.status));
    if let Some(due) = copy.body.due_back {
        body.push_str(&format!("<p>Due back: {due}</p>\n"));
    }
    body.push_str(&format!(
        "<p><a href=\"{base}/update\">Update</a> | <a href=\"{base}/delete\">Delete</a></p>\n",
        base = bookinstance_url(copy.id)
    ));
    views::layout(&format!("Copy: {}", copy.body.imprint), &body)
}

pub fn bookinstance_delete(copy: &Doc<BookInstance>) -> Html<String> {
    let body = format!(
        "<p>Do you really want to delete this copy?</p>\n\
         <p>{} ({})</p>\n\
         <form method=\"post\" action=\"{}/delete\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n",
        copy.body.imprint,
        copy.body.status,
        bookinstance_url(copy.id)
    );
    views::layout("Delete BookInstance", &body)
}
