use axum::body::Body as AxumBody;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode};
use tracing::error;

use snoypredict_core::http::{Response as CoreResponse, TEXT_CONTENT_TYPE};
use snoypredict_core::Page;

/// Convert a core response into one consumable by Axum/Hyper. Parts are moved over unchanged.
pub fn into_axum_response(response: CoreResponse) -> Response<AxumBody> {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, AxumBody::from(body))
}

/// Marshal a page, answering 500 when the page cannot be expressed as HTTP.
pub fn page_into_axum_response(page: Page) -> Response<AxumBody> {
    match page.into_response() {
        Ok(response) => into_axum_response(response),
        Err(err) => {
            error!("failed to build response: {err}");
            let mut response = Response::new(AxumBody::from(err.to_string()));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
            response
        }
    }
}
