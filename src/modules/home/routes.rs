use std::collections::HashMap;

use axum::{extract::State, response::Html, routing::get, Router};

use lectern_http::AppError;
use lectern_store::RecordId;

use crate::modules::bookinstance::models::Status;
use crate::state::Catalog;

use super::views;

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/books", get(book_list))
        .route("/authors", get(author_list))
        .route("/genres", get(genre_list))
        .route("/bookinstances", get(bookinstance_list))
        .with_state(catalog)
}

/// Dashboard summary, one count per collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCounts {
    pub books: usize,
    pub copies: usize,
    pub available: usize,
    pub authors: usize,
    pub genres: usize,
}

/// Compute all dashboard counts concurrently. A failure in any one count
/// fails the whole aggregate; no partial dashboard is shown.
pub async fn library_counts(catalog: &Catalog) -> Result<LibraryCounts, AppError> {
    let (books, copies, available, authors, genres) = tokio::try_join!(
        catalog.books.count(),
        catalog.copies.count(),
        catalog
            .copies
            .count_where(|copy| copy.body.status == Status::Available),
        catalog.authors.count(),
        catalog.genres.count(),
    )?;

    Ok(LibraryCounts {
        books,
        copies,
        available,
        authors,
        genres,
    })
}

async fn index(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let counts = library_counts(&catalog).await?;
    Ok(views::index(&counts))
}

async fn book_list(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let (books, authors) = tokio::try_join!(catalog.books.all(), catalog.authors.all())?;

    let names: HashMap<RecordId, String> = authors
        .into_iter()
        .map(|doc| (doc.id, doc.body.name()))
        .collect();
    let rows: Vec<_> = books
        .into_iter()
        .map(|book| {
            let author = names.get(&book.body.author).cloned().unwrap_or_default();
            (book, author)
        })
        .collect();

    Ok(views::book_list(&rows))
}

async fn author_list(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let mut authors = catalog.authors.all().await?;
    authors.sort_by(|a, b| a.body.family_name.cmp(&b.body.family_name));
    Ok(views::author_list(&authors))
}

async fn genre_list(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let mut genres = catalog.genres.all().await?;
    genres.sort_by(|a, b| a.body.name.cmp(&b.body.name));
    Ok(views::genre_list(&genres))
}

async fn bookinstance_list(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let (copies, books) = tokio::try_join!(catalog.copies.all(), catalog.books.all())?;

    let titles: HashMap<RecordId, String> = books
        .into_iter()
        .map(|doc| (doc.id, doc.body.title))
        .collect();
    let rows: Vec<_> = copies
        .into_iter()
        .map(|copy| {
            let title = titles.get(&copy.body.book).cloned().unwrap_or_default();
            (copy, title)
        })
        .collect();

    Ok(views::bookinstance_list(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::author::models::Author;
    use crate::modules::book::models::Book;
    use crate::modules::bookinstance::models::BookInstance;
    use crate::modules::genre::models::Genre;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn seed_counts_scenario(catalog: &Catalog) {
        let mut author_ids = Vec::new();
        for (first, family) in [("Frank", "Herbert"), ("Ursula", "LeGuin")] {
            let id = catalog
                .authors
                .insert(&Author {
                    first_name: first.to_string(),
                    family_name: family.to_string(),
                    date_of_birth: None,
                    date_of_death: None,
                })
                .await
                .unwrap();
            author_ids.push(id);
        }

        for name in ["Fiction", "Fantasy", "Horror", "Poetry"] {
            catalog
                .genres
                .insert(&Genre {
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }

        let mut book_ids = Vec::new();
        for title in ["Dune", "The Dispossessed", "Earthsea"] {
            let id = catalog
                .books
                .insert(&Book {
                    title: title.to_string(),
                    author: author_ids[0],
                    summary: "summary".to_string(),
                    isbn: "isbn".to_string(),
                    genre: vec![],
                })
                .await
                .unwrap();
            book_ids.push(id);
        }

        let statuses = [
            Status::Available,
            Status::Available,
            Status::Loaned,
            Status::Maintenance,
            Status::Reserved,
        ];
        for status in statuses {
            catalog
                .copies
                .insert(&BookInstance {
                    book: book_ids[0],
                    imprint: "imprint".to_string(),
                    status,
                    due_back: None,
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn counts_cover_every_collection() {
        let catalog = Catalog::new();
        seed_counts_scenario(&catalog).await;

        let counts = library_counts(&catalog).await.unwrap();

        assert_eq!(
            counts,
            LibraryCounts {
                books: 3,
                copies: 5,
                available: 2,
                authors: 2,
                genres: 4,
            }
        );
    }

    #[tokio::test]
    async fn dashboard_renders_the_counts() {
        let catalog = Catalog::new();
        seed_counts_scenario(&catalog).await;
        let app = router(catalog);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Books: 3"));
        assert!(html.contains("Copies: 5"));
        assert!(html.contains("Copies available: 2"));
        assert!(html.contains("Authors: 2"));
        assert!(html.contains("Genres: 4"));
    }

    #[tokio::test]
    async fn author_list_is_sorted_by_family_name() {
        let catalog = Catalog::new();
        for (first, family) in [("Gene", "Wolfe"), ("Iain", "Banks"), ("Frank", "Herbert")] {
            catalog
                .authors
                .insert(&Author {
                    first_name: first.to_string(),
                    family_name: family.to_string(),
                    date_of_birth: None,
                    date_of_death: None,
                })
                .await
                .unwrap();
        }
        let app = router(catalog);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        let banks = html.find("Banks").unwrap();
        let herbert = html.find("Herbert").unwrap();
        let wolfe = html.find("Wolfe").unwrap();
        assert!(banks < herbert && herbert < wolfe);
    }
}
