use crate::context::RequestContext;
use crate::handlers::{homepage, predict, style_css};
use crate::middleware::RequestLogger;
use crate::page::Page;
use crate::router::RouterService;

const DEFAULT_APP_NAME: &str = "SnoyPredict";

/// Lightweight container around a `RouterService` that can be extended via hook implementations.
pub struct App {
    router: RouterService,
    name: String,
}

impl App {
    /// Create a new application wrapper from the supplied router service.
    pub fn new(router: RouterService) -> Self {
        Self::with_name(router, DEFAULT_APP_NAME)
    }

    /// Construct a new application with the provided router and name.
    pub fn with_name<S>(router: RouterService, name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            router,
            name: name.into(),
        }
    }

    pub fn router(&self) -> &RouterService {
        &self.router
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S>(&mut self, name: S)
    where
        S: Into<String>,
    {
        self.name = name.into();
    }

    pub fn default_name() -> &'static str {
        DEFAULT_APP_NAME
    }

    /// Turn a request URL into a page.
    ///
    /// Never fails: an unparsable URL or a handler error is rendered into the HTML error page
    /// carrying the matching status.
    pub async fn handle(&self, url: &str) -> Page {
        match RequestContext::parse(url) {
            Ok(ctx) => self.router.oneshot(ctx).await,
            Err(err) => {
                tracing::error!("rejecting request: {}", err);
                err.into_page()
            }
        }
    }
}

/// Trait implemented by application hook adapters.
pub trait Hooks {
    /// Allow implementations to mutate the freshly constructed application before use.
    fn configure(_app: &mut App) {}

    /// Build the router service for the application.
    fn routes() -> RouterService;

    /// Display name for the application. Defaults to `"SnoyPredict"`.
    fn name() -> &'static str {
        App::default_name()
    }

    /// Construct an `App` by wiring the routes and invoking the configuration hook.
    fn build_app() -> App
    where
        Self: Sized,
    {
        let mut app = App::with_name(Self::routes(), Self::name());
        Self::configure(&mut app);
        app
    }
}

/// The prediction site: homepage, stylesheet and the `/predict` echo.
pub struct SnoyPredict;

impl Hooks for SnoyPredict {
    fn routes() -> RouterService {
        build_router()
    }
}

pub fn build_router() -> RouterService {
    RouterService::builder()
        .middleware(RequestLogger)
        .route("/", homepage)
        .route("/style.css", style_css)
        .route("/predict", predict)
        .build()
}
