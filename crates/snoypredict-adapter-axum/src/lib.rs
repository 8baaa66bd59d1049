//! Axum adapter that serves the SnoyPredict app from a local dev server.

mod dev_server;
mod request;
mod response;
mod service;

pub use dev_server::{run_app, AxumDevServer, AxumDevServerConfig};
pub use request::request_url;
pub use response::{into_axum_response, page_into_axum_response};
pub use service::SnoyPredictAxumService;
