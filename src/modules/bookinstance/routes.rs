use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use lectern_http::AppError;
use lectern_store::{Doc, RecordId};

use crate::forms::{FormData, FormErrors};
use crate::modules::book::models::Book;
use crate::state::Catalog;

use super::models::{bookinstance_url, BookInstanceForm};
use super::views;

const LIST_URL: &str = "/bookinstances";

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/create", get(create_form).post(create))
        .route("/{id}/update", get(update_form).post(update))
        .route("/{id}/delete", get(delete_form).post(delete))
        .route("/{id}", get(detail))
        .with_state(catalog)
}

/// The book options the copy form needs: every book, natural order.
async fn book_options(catalog: &Catalog) -> Result<Vec<Doc<Book>>, AppError> {
    Ok(catalog.books.all().await?)
}

async fn create_form(State(catalog): State<Catalog>) -> Result<Html<String>, AppError> {
    let books = book_options(&catalog).await?;
    Ok(views::bookinstance_form(
        "Create BookInstance",
        &BookInstanceForm::empty(),
        &books,
        &FormErrors::new(),
    ))
}

async fn create(
    State(catalog): State<Catalog>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let data = FormData::from(pairs);
    let (form, parsed) = BookInstanceForm::parse(&data)?;

    match parsed {
        Ok(copy) => {
            let id = catalog.copies.insert(&copy).await?;
            Ok(Redirect::to(&bookinstance_url(id)).into_response())
        }
        Err(errors) => {
            let books = book_options(&catalog).await?;
            Ok(
                views::bookinstance_form("Create BookInstance", &form, &books, &errors)
                    .into_response(),
            )
        }
    }
}

async fn update_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let (copy, books) = tokio::try_join!(
        async { catalog.copies.find_by_id(id).await.map_err(AppError::from) },
        book_options(&catalog)
    )?;

    let copy = copy.ok_or_else(|| AppError::not_found("Book copy not found"))?;
    Ok(views::bookinstance_form(
        "Update BookInstance",
        &BookInstanceForm::from_record(&copy.body),
        &books,
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
    let (form, parsed) = BookInstanceForm::parse(&data)?;

    match parsed {
        Ok(copy) => {
            catalog.copies.replace(id, &copy).await?;
            Ok(Redirect::to(&bookinstance_url(id)).into_response())
        }
        Err(errors) => {
            let books = book_options(&catalog).await?;
            Ok(
                views::bookinstance_form("Update BookInstance", &form, &books, &errors)
                    .into_response(),
            )
        }
    }
}

async fn delete_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    match catalog.copies.find_by_id(id).await? {
        None => Ok(Redirect::to(LIST_URL).into_response()),
        Some(copy) => Ok(views::bookinstance_delete(&copy).into_response()),
    }
}

/// Nothing references a copy, so its delete needs no dependency guard.
async fn delete(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    catalog.copies.remove(id).await?;
    Ok(Redirect::to(LIST_URL).into_response())
}

async fn detail(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let copy = catalog
        .copies
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Book copy not found"))?;

    let book = catalog.books.find_by_id(copy.body.book).await?;
    Ok(views::bookinstance_detail(&copy, book.as_ref()))
}
