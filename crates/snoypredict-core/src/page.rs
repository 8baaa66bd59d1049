use bytes::Bytes;

use crate::error::PredictError;
use crate::http::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    response_builder, Response, StatusCode, CSS_CONTENT_TYPE, HTML_CONTENT_TYPE,
    TEXT_CONTENT_TYPE,
};

/// Fully rendered result of handling one URL.
///
/// Adapters only ever read the three accessors (or call [`Page::into_response`]) and copy the
/// values onto the platform response unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl Page {
    pub fn new<C, B>(status: StatusCode, content_type: C, body: B) -> Self
    where
        C: Into<String>,
        B: Into<String>,
    {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn html<B>(body: B) -> Self
    where
        B: Into<String>,
    {
        Self::new(StatusCode::OK, HTML_CONTENT_TYPE, body)
    }

    pub fn css<B>(body: B) -> Self
    where
        B: Into<String>,
    {
        Self::new(StatusCode::OK, CSS_CONTENT_TYPE, body)
    }

    pub fn text<B>(body: B) -> Self
    where
        B: Into<String>,
    {
        Self::new(StatusCode::OK, TEXT_CONTENT_TYPE, body)
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Marshal the page into an `http` response: status, `Content-Type` and body are copied
    /// verbatim, `Content-Length` is derived from the body.
    pub fn into_response(self) -> Result<Response, PredictError> {
        let Page {
            status,
            content_type,
            body,
        } = self;

        response_builder()
            .status(status)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(Bytes::from(body))
            .map_err(PredictError::internal)
    }
}

/// Convert handler return values into a [`Page`].
pub trait IntoPage {
    fn into_page(self) -> Page;
}

impl IntoPage for Page {
    fn into_page(self) -> Page {
        self
    }
}
