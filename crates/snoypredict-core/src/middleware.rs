use std::sync::Arc;

use async_trait::async_trait;
use web_time::Instant;

use crate::context::RequestContext;
use crate::error::PredictError;
use crate::handler::DynHandler;
use crate::page::Page;

pub type BoxMiddleware = Arc<dyn Middleware>;

#[async_trait(?Send)]
pub trait Middleware: Send + Sync + 'static {
    async fn handle(&self, ctx: RequestContext, next: Next<'_>) -> Result<Page, PredictError>;
}

pub struct Next<'a> {
    middlewares: &'a [BoxMiddleware],
    handler: &'a dyn DynHandler,
}

impl<'a> Next<'a> {
    pub fn new(middlewares: &'a [BoxMiddleware], handler: &'a dyn DynHandler) -> Self {
        Self {
            middlewares,
            handler,
        }
    }

    pub async fn run(self, ctx: RequestContext) -> Result<Page, PredictError> {
        if let Some((head, tail)) = self.middlewares.split_first() {
            head.handle(ctx, Next::new(tail, self.handler)).await
        } else {
            self.handler.call(ctx).await
        }
    }
}

/// Logs the path, resulting status and latency of every routed request.
pub struct RequestLogger;

#[async_trait(?Send)]
impl Middleware for RequestLogger {
    async fn handle(&self, ctx: RequestContext, next: Next<'_>) -> Result<Page, PredictError> {
        let path = ctx.path().to_string();
        let start = Instant::now();

        let result = next.run(ctx).await;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        match &result {
            Ok(page) => tracing::info!(
                path = %path,
                status = page.status().as_u16(),
                elapsed_ms = elapsed,
                "request"
            ),
            Err(err) => tracing::error!(
                path = %path,
                status = err.status().as_u16(),
                error = %err,
                elapsed_ms = elapsed,
                "request failed"
            ),
        }
        result
    }
}
