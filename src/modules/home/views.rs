use axum::response::Html;

use lectern_store::Doc;

use crate::modules::author::models::{author_url, Author};
use crate::modules::book::models::{book_url, Book};
use crate::modules::bookinstance::models::{bookinstance_url, BookInstance};
use crate::modules::genre::models::{genre_url, Genre};
use crate::views;

use super::routes::LibraryCounts;

pub fn index(counts: &LibraryCounts) -> Html<String> {
    let body = format!(
        "<p>The library has the following record counts:</p>\n\
         <ul>\n\
         <li>Books: {books}</li>\n\
         <li>Copies: {copies}</li>\n\
         <li>Copies available: {available}</li>\n\
         <li>Authors: {authors}</li>\n\
         <li>Genres: {genres}</li>\n\
         </ul>\n",
        books = counts.books,
        copies = counts.copies,
        available = counts.available,
        authors = counts.authors,
        genres = counts.genres,
    );
    views::layout("Local Library Home", &body)
}

pub fn book_list(books: &[(Doc<Book>, String)]) -> Html<String> {
    let mut body = String::from("<ul>\n");
    for (book, author_name) in books {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a> ({})</li>\n",
            book_url(book.id),
            book.body.title,
            author_name
        ));
    }
    body.push_str("</ul>\n");
    views::layout("Book List", &body)
}

pub fn author_list(authors: &[Doc<Author>]) -> Html<String> {
    let mut body = String::from("<ul>\n");
    for author in authors {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a> ({})</li>\n",
            author_url(author.id),
            author.body.name(),
            author.body.lifespan()
        ));
    }
    body.push_str("</ul>\n");
    views::layout("Author List", &body)
}

pub fn genre_list(genres: &[Doc<Genre>]) -> Html<String> {
    let mut body = String::from("<ul>\n");
    for genre in genres {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            genre_url(genre.id),
            genre.body.name
        ));
    }
    body.push_str("</ul>\n");
    views::layout("Genre List", &body)
}

pub fn bookinstance_list(copies: &[(Doc<BookInstance>, String)]) -> Html<String> {
    let mut body = String::from("<ul>\n");
    for (copy, book_title) in copies {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}: {}</a> ({})</li>\n",
            bookinstance_url(copy.id),
            book_title,
            copy.body.imprint,
            copy.body.status
        ));
    }
    body.push_str("</ul>\n");
    views::layout("Book Instance List", &body)
}
