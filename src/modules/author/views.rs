use axum::response::Html;

use lectern_store::Doc;

use crate::forms::FormErrors;
use crate::modules::book::models::{book_url, Book};
use crate::views;

use super::models::{author_url, Author, AuthorForm};

pub fn author_form(title: &str, form: &AuthorForm, errors: &FormErrors) -> Html<String> {
    let body = format!(
        "{errors}<form method=\"post\">\n{first}{family}{birth}{death}\
         <button type=\"submit\">Submit</button>\n</form>\n",
        errors = views::errors_list(errors),
        first = views::text_input("First name:", "first_name", &form.first_name),
        family = views::text_input("Family name:", "family_name", &form.family_name),
        birth = views::date_input("Date of birth:", "date_of_birth", &form.date_of_birth),
        death = views::date_input("Date of death:", "date_of_death", &form.date_of_death),
    );
    views::layout(title, &body)
}

pub fn author_detail(author: &Doc<Author>, books: &[Doc<Book>]) -> Html<String> {
    let mut body = format!(
        "<p class=\"lifespan\">{}</p>\n<h2>Books</h2>\n",
        author.body.lifespan()
    );
    if books.is_empty() {
        body.push_str("<p>This author has no books.</p>\n");
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
        base = author_url(author.id)
    ));
    views::layout(&author.body.name(), &body)
}

pub fn author_delete(author: &Doc<Author>, books: &[Doc<Book>]) -> Html<String> {
    let mut body = String::new();
    if books.is_empty() {
        body.push_str(&format!(
            "<p>Do you really want to delete this author?</p>\n\
             <p>{}</p>\n\
             <form method=\"post\" action=\"{}/delete\">\n\
             <button type=\"submit\">Delete</button>\n</form>\n",
            author.body.name(),
            author_url(author.id)
        ));
    } else {
        body.push_str(
            "<p>Delete the following books before attempting to delete this author.</p>\n\
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
    views::layout("Delete Author", &body)
}
