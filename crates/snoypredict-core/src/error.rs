use anyhow::Error as AnyError;
use serde_json::json;
use thiserror::Error;

use crate::http::StatusCode;
use crate::page::Page;
use crate::templates;

/// Failure while turning a URL into a page. Every variant maps to an HTTP status and is rendered
/// as the HTML error page, so `App::handle` never surfaces an error to the platform.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Could not parse URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Field not provided for prediction: {name}")]
    FieldNotProvided { name: &'static str },
    #[error("Invalid date {date}: {source}")]
    InvalidDate {
        date: String,
        source: chrono::ParseError,
    },
    #[error("Invalid query string: {source}")]
    InvalidQuery { source: serde_urlencoded::de::Error },
    #[error("Could not render template: {source}")]
    Render { source: handlebars::RenderError },
    #[error("internal error: {source}")]
    Internal {
        #[from]
        source: AnyError,
    },
}

impl PredictError {
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        PredictError::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    pub fn field_not_provided(name: &'static str) -> Self {
        PredictError::FieldNotProvided { name }
    }

    pub fn internal<E>(error: E) -> Self
    where
        E: Into<AnyError>,
    {
        PredictError::Internal {
            source: error.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PredictError::FieldNotProvided { .. }
            | PredictError::InvalidDate { .. }
            | PredictError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            PredictError::InvalidUrl { .. }
            | PredictError::Render { .. }
            | PredictError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as an HTML page carrying this error's status.
    ///
    /// Falls back to a plain-text page when the error template itself cannot be rendered.
    pub fn into_page(self) -> Page {
        let status = self.status();
        let message = self.to_string();
        let data = json!({
            "title": "Error occurred",
            "message": message,
        });

        match templates::render(templates::ERROR, &data) {
            Ok(html) => Page::html(html).with_status(status),
            Err(err) => {
                tracing::error!("failed to render error page: {}", err);
                Page::text(message).with_status(status)
            }
        }
    }
}
