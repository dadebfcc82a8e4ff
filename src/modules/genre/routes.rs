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

use super::models::{genre_url, GenreForm};
use super::views;

const LIST_URL: &str = "/genres";

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/create", get(create_form).post(create))
        .route("/{id}/update", get(update_form).post(update))
        .route("/{id}/delete", get(delete_form).post(delete))
        .route("/{id}", get(detail))
        .with_state(catalog)
}

async fn create_form() -> Html<String> {
    views::genre_form("Create Genre", &GenreForm::empty(), &FormErrors::new())
}

async fn create(
    State(catalog): State<Catalog>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let data = FormData::from(pairs);
    let (form, parsed) = GenreForm::parse(&data);

    let genre = match parsed {
        Ok(genre) => genre,
        Err(errors) => {
            return Ok(views::genre_form("Create Genre", &form, &errors).into_response())
        }
    };

    // Genre names are unique by convention: a create for an existing name
    // redirects to the existing record instead of duplicating it.
    let name = genre.name.clone();
    if let Some(existing) = catalog.genres.find_one(move |g| g.body.name == name).await? {
        return Ok(Redirect::to(&genre_url(existing.id)).into_response());
    }

    let id = catalog.genres.insert(&genre).await?;
    Ok(Redirect::to(&genre_url(id)).into_response())
}

async fn update_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: RecordId = id.parse()?;
    let genre = catalog
        .genres
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Genre not found"))?;

    Ok(views::genre_form(
        "Update Genre",
        &GenreForm::from_record(&genre.body),
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
    let (form, parsed) = GenreForm::parse(&data);

    match parsed {
        Ok(genre) => {
            catalog.genres.replace(id, &genre).await?;
            Ok(Redirect::to(&genre_url(id)).into_response())
        }
        Err(errors) => Ok(views::genre_form("Update Genre", &form, &errors).into_response()),
    }
}

async fn delete_form(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let preview = guard::delete_preview(&catalog.genres, &catalog.books, id, move |book| {
        book.body.genre.contains(&id)
    })
    .await?;

    match preview {
        None => Ok(Redirect::to(LIST_URL).into_response()),
        Some((genre, books)) => Ok(views::genre_delete(&genre, &books).into_response()),
    }
}

async fn delete(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id: RecordId = id.parse()?;
    let outcome = guard::guard_delete(&catalog.genres, &catalog.books, id, move |book| {
        book.body.genre.contains(&id)
    })
    .await?;

    match outcome {
        DeleteOutcome::Blocked { entity, dependents } => {
            Ok(views::genre_delete(&entity, &dependents).into_response())
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
    let (genre, books) = tokio::try_join!(
        catalog.genres.find_by_id(id),
        catalog.books.find(move |book| book.body.genre.contains(&id))
    )?;

    let genre = genre.ok_or_else(|| AppError::not_found("Genre not found"))?;
    Ok(views::genre_detail(&genre, &books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::models::Genre;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn creating_an_existing_genre_redirects_without_duplicating() {
        let catalog = Catalog::new();
        let existing = catalog
            .genres
            .insert(&Genre {
                name: "Fiction".to_string(),
            })
            .await
            .unwrap();
        let app = router(catalog.clone());

        let response = app.oneshot(post("/create", "name=Fiction")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION].to_str().unwrap(),
            genre_url(existing)
        );
        assert_eq!(catalog.genres.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn creating_a_new_genre_persists_it() {
        let catalog = Catalog::new();
        let app = router(catalog.clone());

        let response = app.oneshot(post("/create", "name=Fantasy")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(catalog.genres.count().await.unwrap(), 1);
        let stored = catalog
            .genres
            .find_one(|g| g.body.name == "Fantasy")
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn genre_names_match_exactly_after_sanitization() {
        let catalog = Catalog::new();
        catalog
            .genres
            .insert(&Genre {
                name: "Fiction".to_string(),
            })
            .await
            .unwrap();
        let app = router(catalog.clone());

        // Differs in case, so it is a distinct genre.
        let response = app.oneshot(post("/create", "name=fiction")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(catalog.genres.count().await.unwrap(), 2);
    }
}
