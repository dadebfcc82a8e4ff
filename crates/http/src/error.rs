//! Error handling for the lectern HTTP layer.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use uuid::{NoContext, Timestamp, Uuid};

use lectern_store::{ParseIdError, StoreError};

/// Application error types that map to HTTP responses.
///
/// Field-level form errors never reach this type; they are recovered locally
/// by re-rendering the form. What arrives here is terminal for the request:
/// a missing record, a malformed identifier, or an unexpected storage error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("invalid identifier: {message}")]
    InvalidId { message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid identifier error.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            Self::not_found(err.to_string())
        } else {
            Self::Internal(err.into())
        }
    }
}

impl From<ParseIdError> for AppError {
    fn from(err: ParseIdError) -> Self {
        Self::invalid_id(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v7(Timestamp::now(NoContext));

        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::InvalidId { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")),
        };

        tracing::error!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            message = %message,
            "request error"
        );

        // In production, hide internal error details.
        let message = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            "An internal server error occurred".to_string()
        } else {
            message
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

/// Standalone error view; the site layout lives in the app crate and is not
/// available here.
fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
         <body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to the catalog</a></p>\n</body>\n</html>\n",
        code = status.as_u16(),
        reason = reason,
        message = escape(message),
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use lectern_store::RecordId;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found("Book not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_id_maps_to_422() {
        let response = AppError::invalid_id("'abc' is not a valid record id").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let internal = anyhow::anyhow!("storage offline");
        let response = AppError::Internal(internal).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_not_found_and_parse_errors_keep_their_status() {
        let missing = StoreError::NotFound {
            collection: "book",
            id: RecordId::generate(),
        };
        let response = AppError::from(missing).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bad_id = "junk".parse::<RecordId>().unwrap_err();
        let response = AppError::from(bad_id).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_page_escapes_the_message() {
        let page = error_page(StatusCode::NOT_FOUND, "<script>alert(1)</script>");
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
