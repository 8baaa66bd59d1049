use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use crate::error::PredictError;
use crate::page::Page;

pub use http::header;
pub use http::response::Builder as ResponseBuilder;

pub type StatusCode = http::StatusCode;

/// Outbound response handed to adapters. Bodies are always fully rendered text.
pub type Response = http::Response<Bytes>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Page, PredictError>> + 'static>>;

pub fn response_builder() -> ResponseBuilder {
    http::Response::builder()
}

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
