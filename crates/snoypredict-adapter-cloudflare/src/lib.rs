//! Cloudflare Workers entry point for SnoyPredict.
//!
//! The worker forwards the request URL to the core app and copies the resulting page's
//! status, `Content-Type` and body into a `worker::Response`.

#![cfg_attr(target_arch = "wasm32", no_main)]

#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
mod logger;
#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
mod request;
#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
mod response;

#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
pub use logger::{init_logger, ConsoleLogger};
#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
pub use request::dispatch;
#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
pub use response::from_page;

/// Manifest compiled into the worker; there is no filesystem at the edge.
pub const MANIFEST: &str = include_str!("../../../snoypredict.toml");

#[cfg(all(feature = "cloudflare", target_arch = "wasm32"))]
mod entry {
    use once_cell::sync::Lazy;
    use snoypredict_core::manifest::ManifestLoader;
    use snoypredict_core::{App, Hooks, SnoyPredict};
    use worker::{event, Context, Env, Request, Response, Result};

    static APP: Lazy<App> = Lazy::new(|| {
        let mut app = SnoyPredict::build_app();
        match ManifestLoader::load_from_str(crate::MANIFEST) {
            Ok(loader) => app.set_name(loader.manifest().app_name()),
            Err(err) => log::warn!("ignoring embedded manifest: {}", err),
        }
        app
    });

    #[event(fetch)]
    pub async fn main(req: Request, _env: Env, _ctx: Context) -> Result<Response> {
        crate::init_logger();
        crate::dispatch(&APP, req).await
    }
}
