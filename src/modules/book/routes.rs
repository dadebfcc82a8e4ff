use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use lectern_http::AppError;
use lectern_store::{Doc, RecordId};

use crate::forms::{FormData, FormErrors};
use crate::guard::{self, DeleteOutcome};
use crate::modules::author::models::Author;
use crate::modules::genre::models::Genre;
use crate::state::Catalog;

use super::models::{book_url, mark_genres, BookForm};
use super::views;

const LIST_URL: &str = "/books";

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/create", get(create_form).post(create))
        .route("/{id}/update", get(update_form).post(update))
        .route("/{id}/delete", get(delete_form).post(delete))
        .route("/{id}", get(detail))
        .with_state(catalog)
}

/// Load the option sets the book form needs, sorted for display.
async fn form_options(catalog: &Catalog) -> Result<(Vec<Doc<Author>>, Vec<Doc<Genre>>), AppError> {
    let (mut authors, mut genres) =
        tokio::try_join!(catalog.authors.all(), catalog.genres.all())?;
    authors.sort_by(|a, b| a.body.family_name.cmp(&b.body.family_name));
    genres.sort_by(|a, b| a.body.name.cmp(&b.body.name));
    Ok((authors, genres))
}

async fn create_form(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let (authors, genres) = form_options(&catalog).await?;
    Ok(views::book_form(
        "Create Book",
        &BookForm::empty(),
        &authors,
        &mark_genres(&genres, &[]),
        &FormErrors::new(),
    ))
}

async fn create(
    State(catalog): State<Catalog>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let data = FormData::from(pairs);
    let (form, parsed) = BookForm::parse(&data)?;

    match parsed {
        Ok(book) => {
            let id = catalog.books.insert(&book).await?;
            Ok(Redirect::to(&book_url(id)).into_response())
        }
        Err(errors) => {
            // Re-supply the option sets and keep the user's selections.
            let (authors, genres) = form_options(&catalog).await?;
            let marked = mark_genres(&genres, &form.genre);
            Ok(views::book_form("Create Book", &form, &authors, &marked, &errors).into_response())
        }
    }
}

async fn update_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let (book, (authors, genres)) = tokio::try_join!(
        async { catalog.books.find_by_id(id).await.map_err(AppError::from) },
        form_options(&catalog)
    )?;

    let book = book.ok_or_else(|| AppError::not_found("Book not found"))?;
    let form = BookForm::from_record(&book.body);
    let marked = mark_genres(&genres, &form.genre);

    Ok(views::book_form(
        "Update Book",
        &form,
        &authors,
        &marked,
        &FormErrors::new(),
    ))
}

async fn update(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let data = FormData::from(pairs);
    let (form, parsed) = BookForm::parse(&data)?;

    match parsed {
        Ok(book) => {
            catalog.books.replace(id, &book).await?;
            Ok(Redirect::to(&book_url(id)).into_response())
        }
        Err(errors) => {
            let (authors, genres) = form_options(&catalog).await?;
            let marked = mark_genres(&genres, &form.genre);
            Ok(views::book_form("Update Book", &form, &authors, &marked, &errors).into_response())
        }
    }
}

async fn delete_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let preview = guard::delete_preview(&catalog.books, &catalog.copies, id, move |copy| {
        copy.body.book == id
    })
    .await?;

    match preview {
        None => Ok(Redirect::to(LIST_URL).into_response()),
        Some((book, copies)) => Ok(views::book_delete(&book, &copies).into_response()),
    }
}

async fn delete(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let outcome = guard::guard_delete(&catalog.books, &catalog.copies, id, move |copy| {
        copy.body.book == id
    })
    .await?;

    match outcome {
        DeleteOutcome::Blocked { entity, dependents } => {
            Ok(views::book_delete(&entity, &dependents).into_response())
        }
        DeleteOutcome::AlreadyGone | DeleteOutcome::Deleted => {
            Ok(Redirect::to(LIST_URL).into_response())
        }
    }
}

async fn detail(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let (book, copies) = tokio::try_join!(
        catalog.books.find_by_id(id),
        catalog.copies.find(move |copy| copy.body.book == id)
    )?;
    let book = book.ok_or_else(|| AppError::not_found("Book not found"))?;

    // Expand the book's references for the view.
    let author_id = book.body.author;
    let genre_ids = book.body.genre.clone();
    let (author, genres) = tokio::try_join!(
        catalog.authors.find_by_id(author_id),
        catalog.genres.find(move |genre| genre_ids.contains(&genre.id))
    )?;

    Ok(views::book_detail(&book, author.as_ref(), &genres, &copies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::models::Book;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn sample_author(catalog: &Catalog) -> RecordId {
        catalog
            .authors
            .insert(&Author {
                first_name: "Frank".to_string(),
                family_name: "Herbert".to_string(),
                date_of_birth: None,
                date_of_death: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_with_genres_persists_the_references() {
        let catalog = Catalog::new();
        let author = sample_author(&catalog).await;
        let g1 = catalog
            .genres
            .insert(&Genre {
                name: "Fiction".to_string(),
            })
            .await
            .unwrap();
        let app = router(catalog.clone());

        let response = app
            .oneshot(post(
                "/create",
                format!("title=Dune&author={author}&summary=Spice&isbn=9780441172719&genre={g1}"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let book = catalog
            .books
            .find_one(|b| b.body.title == "Dune")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(book.body.author, author);
        assert_eq!(book.body.genre, [g1]);
    }

    #[tokio::test]
    async fn failed_create_rerenders_with_options_and_checked_genres() {
        let catalog = Catalog::new();
        sample_author(&catalog).await;
        let g1 = catalog
            .genres
            .insert(&Genre {
                name: "Fiction".to_string(),
            })
            .await
            .unwrap();
        catalog
            .genres
            .insert(&Genre {
                name: "Fantasy".to_string(),
            })
            .await
            .unwrap();
        let app = router(catalog.clone());

        let response = app
            .oneshot(post("/create", format!("title=&summary=Spice&genre={g1}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Title must not be empty."));
        assert!(html.contains("ISBN must not be empty"));
        assert!(html.contains(&format!("value=\"{g1}\" checked")));
        assert!(html.contains("Herbert, Frank"));
        assert_eq!(catalog.books.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn tampered_author_reference_is_422() {
        let catalog = Catalog::new();
        let app = router(catalog);

        let response = app
            .oneshot(post(
                "/create",
                "title=Dune&author=garbage&summary=Spice&isbn=123".to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn deleting_a_book_with_copies_is_blocked() {
        let catalog = Catalog::new();
        let author = sample_author(&catalog).await;
        let book_id = catalog
            .books
            .insert(&Book {
                title: "Dune".to_string(),
                author,
                summary: "Spice".to_string(),
                isbn: "123".to_string(),
                genre: vec![],
            })
            .await
            .unwrap();
        catalog
            .copies
            .insert(&crate::modules::bookinstance::models::BookInstance {
                book: book_id,
                imprint: "Ace, 1990".to_string(),
                status: crate::modules::bookinstance::models::Status::Available,
                due_back: None,
            })
            .await
            .unwrap();
        let app = router(catalog.clone());

        let response = app
            .oneshot(post(&format!("/{book_id}/delete"), String::new()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Ace, 1990"));
        assert!(catalog.books.find_by_id(book_id).await.unwrap().is_some());
    }
}
