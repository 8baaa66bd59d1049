//! URL-in, page-out core of SnoyPredict, shared by every edge adapter.

pub mod app;
pub mod context;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod http;
pub mod manifest;
pub mod middleware;
pub mod page;
pub mod prediction;
pub mod router;
pub mod templates;

pub use app::{App, Hooks, SnoyPredict};
pub use context::RequestContext;
pub use error::PredictError;
pub use page::Page;
