use std::sync::Arc;

use matchit::Router as PathRouter;

use crate::context::RequestContext;
use crate::error::PredictError;
use crate::handler::{BoxHandler, IntoHandler};
use crate::handlers;
use crate::middleware::{BoxMiddleware, Middleware, Next};
use crate::page::Page;

/// Routes match on the URL path alone; the request method never reaches the core.
pub struct RouterBuilder {
    paths: PathRouter<BoxHandler>,
    route_paths: Vec<String>,
    fallback: BoxHandler,
    middlewares: Vec<BoxMiddleware>,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self {
            paths: PathRouter::new(),
            route_paths: Vec::new(),
            fallback: handlers::not_found.into_handler(),
            middlewares: Vec::new(),
        }
    }
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<H>(mut self, path: &str, handler: H) -> Self
    where
        H: IntoHandler,
    {
        self.paths
            .insert(path, handler.into_handler())
            .unwrap_or_else(|err| panic!("duplicate route definition for {}: {}", path, err));
        self.route_paths.push(path.to_string());
        self
    }

    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> RouterService {
        RouterService {
            inner: Arc::new(RouterInner {
                paths: self.paths,
                route_paths: self.route_paths,
                fallback: self.fallback,
                middlewares: self.middlewares,
            }),
        }
    }
}

#[derive(Clone)]
pub struct RouterService {
    inner: Arc<RouterInner>,
}

struct RouterInner {
    paths: PathRouter<BoxHandler>,
    route_paths: Vec<String>,
    fallback: BoxHandler,
    middlewares: Vec<BoxMiddleware>,
}

impl RouterService {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Registered paths in insertion order.
    pub fn routes(&self) -> &[String] {
        &self.inner.route_paths
    }

    /// Run the matching handler (or the fallback) through the middleware chain.
    pub async fn dispatch(&self, ctx: RequestContext) -> Result<Page, PredictError> {
        let inner = &self.inner;
        let handler = match inner.paths.at(ctx.path()) {
            Ok(matched) => matched.value,
            Err(_) => &inner.fallback,
        };
        Next::new(&inner.middlewares, handler.as_ref()).run(ctx).await
    }

    /// Like [`RouterService::dispatch`], but renders errors into their error page.
    pub async fn oneshot(&self, ctx: RequestContext) -> Page {
        match self.dispatch(ctx).await {
            Ok(page) => page,
            Err(err) => err.into_page(),
        }
    }
}
