use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body as AxumBody;
use axum::http::{Request, Response};
use tokio::{runtime::Handle, task};
use tower::Service;

use snoypredict_core::App;

use crate::request::request_url;
use crate::response::page_into_axum_response;

/// Tower service that hands each request URL to the app and marshals the page back.
#[derive(Clone)]
pub struct SnoyPredictAxumService {
    app: Arc<App>,
    authority: Arc<str>,
}

impl SnoyPredictAxumService {
    /// `authority` is used to rebuild absolute URLs for requests without a `Host` header.
    pub fn new(app: Arc<App>, authority: impl Into<Arc<str>>) -> Self {
        Self {
            app,
            authority: authority.into(),
        }
    }
}

impl Service<Request<AxumBody>> for SnoyPredictAxumService {
    type Response = Response<AxumBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<AxumBody>) -> Self::Future {
        let app = Arc::clone(&self.app);
        let url = request_url(&request, &self.authority);
        Box::pin(async move {
            // App futures are `!Send`; drive them on this worker thread.
            let page =
                task::block_in_place(move || Handle::current().block_on(app.handle(&url)));
            Ok(page_into_axum_response(page))
        })
    }
}
