use snoypredict_core::http::header::CONTENT_TYPE;
use snoypredict_core::Page;
use worker::{Error as WorkerError, Response as CfResponse};

/// Copy a page into a Workers response: status, `Content-Type` and body, nothing else.
pub fn from_page(page: Page) -> Result<CfResponse, WorkerError> {
    let status = page.status().as_u16();
    let content_type = page.content_type().to_string();

    let mut response = CfResponse::from_bytes(page.into_body().into_bytes())
        .map_err(to_rust_error)?
        .with_status(status);
    response
        .headers_mut()
        .set(CONTENT_TYPE.as_str(), &content_type)
        .map_err(to_rust_error)?;
    Ok(response)
}

fn to_rust_error(err: WorkerError) -> WorkerError {
    WorkerError::RustError(format!("failed to build worker response: {err}"))
}
