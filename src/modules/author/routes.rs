use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use lectern_http::AppError;
use lectern_store::RecordId;

use crate::forms::{FormData, FormErrors};
use crate::guard::{self, DeleteOutcome};
use crate::state::Catalog;

use super::models::{author_url, AuthorForm};
use super::views;

const LIST_URL: &str = "/authors";

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/create", get(create_form).post(create))
        .route("/{id}/update", get(update_form).post(update))
        .route("/{id}/delete", get(delete_form).post(delete))
        .route("/{id}", get(detail))
        .with_state(catalog)
}

async fn create_form() -> Html<String> {
    views::author_form("Create Author", &AuthorForm::empty(), &FormErrors::new())
}

async fn create(
    State(catalog): State<Catalog>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let data = FormData::from(pairs);
    let (form, parsed) = AuthorForm::parse(&data);

    match parsed {
        Ok(author) => {
            let id = catalog.authors.insert(&author).await?;
            Ok(Redirect::to(&author_url(id)).into_response())
        }
        Err(errors) => Ok(views::author_form("Create Author", &form, &errors).into_response()),
    }
}

async fn update_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let author = catalog
        .authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;

    Ok(views::author_form(
        "Update Author",
        &AuthorForm::from_record(&author.body),
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
    let (form, parsed) = AuthorForm::parse(&data);

    match parsed {
        Ok(author) => {
            catalog.authors.replace(id, &author).await?;
            Ok(Redirect::to(&author_url(id)).into_response())
        }
        Err(errors) => Ok(views::author_form("Update Author", &form, &errors).into_response()),
    }
}

async fn delete_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let preview =
        guard::delete_preview(&catalog.authors, &catalog.books, id, move |book| {
            book.body.author == id
        })
        .await?;

    match preview {
        None => Ok(Redirect::to(LIST_URL).into_response()),
        Some((author, books)) => Ok(views::author_delete(&author, &books).into_response()),
    }
}

async fn delete(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let outcome = guard::guard_delete(&catalog.authors, &catalog.books, id, move |book| {
        book.body.author == id
    })
    .await?;

    match outcome {
        DeleteOutcome::Blocked { entity, dependents } => {
            Ok(views::author_delete(&entity, &dependents).into_response())
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
    let (author, books) = tokio::try_join!(
        catalog.authors.find_by_id(id),
        catalog.books.find(move |book| book.body.author == id)
    )?;

    let author = author.ok_or_else(|| AppError::not_found("Author not found"))?;
    Ok(views::author_detail(&author, &books))
}
