use lectern_store::Collection;

use crate::modules::author::models::Author;
use crate::modules::book::models::Book;
use crate::modules::bookinstance::models::BookInstance;
use crate::modules::genre::models::Genre;

/// Shared handle to the catalog's collections; this is the axum state for
/// every module router. Cloning clones the handles, not the data.
#[derive(Clone)]
pub struct Catalog {
    pub authors: Collection<Author>,
    pub books: Collection<Book>,
    pub genres: Collection<Genre>,
    pub copies: Collection<BookInstance>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            authors: Collection::new("author"),
            books: Collection::new("book"),
            genres: Collection::new("genre"),
            copies: Collection::new("bookinstance"),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
