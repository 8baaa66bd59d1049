use snoypredict_core::App;
use worker::{Error as WorkerError, Request as CfRequest, Response as CfResponse};

use crate::response::from_page;

/// Hand the request URL to `app` and marshal the page it returns.
///
/// Method, headers and body are not forwarded.
pub async fn dispatch(app: &App, req: CfRequest) -> Result<CfResponse, WorkerError> {
    let url = req
        .url()
        .map_err(|err| WorkerError::RustError(format!("failed to read request URL: {err}")))?;
    let page = app.handle(url.as_str()).await;
    from_page(page)
}
