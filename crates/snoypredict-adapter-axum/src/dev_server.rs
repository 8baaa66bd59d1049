use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use log::info;
use simple_logger::SimpleLogger;
use tokio::runtime::Builder as RuntimeBuilder;
use tokio::signal;

use snoypredict_core::manifest::ManifestLoader;
use snoypredict_core::{App, Hooks};

use crate::service::SnoyPredictAxumService;

/// Where the dev server listens and whether Ctrl-C stops it.
#[derive(Clone)]
pub struct AxumDevServerConfig {
    pub addr: SocketAddr,
    pub enable_ctrl_c: bool,
}

impl Default for AxumDevServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            enable_ctrl_c: true,
        }
    }
}

/// Blocking local server backing the `snoypredict` binary.
pub struct AxumDevServer {
    app: Arc<App>,
    config: AxumDevServerConfig,
}

impl AxumDevServer {
    pub fn new(app: App) -> Self {
        Self::with_config(app, AxumDevServerConfig::default())
    }

    pub fn with_config(app: App, config: AxumDevServerConfig) -> Self {
        Self {
            app: Arc::new(app),
            config,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let runtime = RuntimeBuilder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to build tokio runtime")?;

        runtime.block_on(self.run_async())
    }

    async fn run_async(self) -> anyhow::Result<()> {
        // Bind eagerly so address errors surface before the runtime starts serving.
        let listener = StdTcpListener::bind(self.config.addr)
            .with_context(|| format!("failed to bind dev server to {}", self.config.addr))?;
        listener
            .set_nonblocking(true)
            .context("failed to set listener to non-blocking")?;
        let listener = tokio::net::TcpListener::from_std(listener)
            .context("failed to adopt std listener into tokio")?;

        self.serve(listener).await
    }

    async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        let AxumDevServer { app, config } = self;
        let authority = listener
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| config.addr.to_string());
        info!("{} listening on http://{}", app.name(), authority);

        let router = Router::new().fallback_service(SnoyPredictAxumService::new(app, authority));
        let server = axum::serve(listener, router);

        if config.enable_ctrl_c {
            server
                .with_graceful_shutdown(async {
                    let _ = signal::ctrl_c().await;
                })
                .await
                .context("axum server error")?;
        } else {
            server.await.context("axum server error")?;
        }

        Ok(())
    }
}

/// Load the manifest, install the logger and serve `A` until interrupted.
pub fn run_app<A: Hooks>(manifest_src: &str) -> anyhow::Result<()> {
    let loader = ManifestLoader::load_from_str(manifest_src).context("invalid manifest")?;
    let manifest = loader.manifest();

    let logging = manifest.logging_or_default("axum");
    SimpleLogger::new()
        .with_level(logging.level_filter())
        .init()
        .ok();

    let addr = manifest.server.socket_addr()?;
    let mut app = A::build_app();
    app.set_name(manifest.app_name());

    let config = AxumDevServerConfig {
        addr,
        ..AxumDevServerConfig::default()
    };
    AxumDevServer::with_config(app, config).run()
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use snoypredict_core::SnoyPredict;
    use std::time::{Duration, Instant};

    struct TestServer {
        base_url: String,
        handle: tokio::task::JoinHandle<()>,
    }

    async fn start_test_server() -> TestServer {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let addr = listener.local_addr().expect("local addr");
        let config = AxumDevServerConfig {
            addr,
            enable_ctrl_c: false,
        };
        let server = AxumDevServer::with_config(SnoyPredict::build_app(), config);

        let handle = tokio::spawn(async move {
            let _ = server.serve(listener).await;
        });

        TestServer {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    async fn get_with_retry(client: &reqwest::Client, url: &str) -> reqwest::Response {
        let start = Instant::now();
        loop {
            match client.get(url).send().await {
                Ok(response) => return response,
                Err(err) if start.elapsed() >= Duration::from_secs(2) => {
                    panic!("server did not respond before timeout: {err}")
                }
                Err(_) => tokio::time::sleep(Duration::from_millis(10)).await,
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn served_responses_are_identical_to_app_pages() {
        let server = start_test_server().await;
        let app = SnoyPredict::build_app();
        let client = reqwest::Client::new();

        for path in [
            "/",
            "/style.css",
            "/predict?prediction=sunny&date=2021-02-05",
            "/predict?date=2021-02-05",
            "/predict?prediction=sunny&date=yesterday",
            "/missing",
        ] {
            let url = format!("{}{path}", server.base_url);
            let expected = app.handle(&url).await;
            let response = get_with_retry(&client, &url).await;

            assert_eq!(response.status().as_u16(), expected.status().as_u16(), "{path}");
            assert_eq!(
                response
                    .headers()
                    .get("content-type")
                    .and_then(|v| v.to_str().ok()),
                Some(expected.content_type()),
                "{path}"
            );
            assert_eq!(response.text().await.unwrap(), expected.body(), "{path}");
        }

        server.handle.abort();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn prediction_is_echoed_back() {
        let server = start_test_server().await;
        let client = reqwest::Client::new();
        let url = format!(
            "{}/predict?prediction=light+snow&date=2021-02-05",
            server.base_url
        );

        let response = get_with_retry(&client, &url).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = response.text().await.unwrap();
        assert!(body.contains("<p>Prediction: light snow</p>"));
        assert!(body.contains("<p>Date: 2021-02-05</p>"));

        server.handle.abort();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unknown_path_is_not_found() {
        let server = start_test_server().await;
        let client = reqwest::Client::new();
        let url = format!("{}/nope", server.base_url);

        let response = get_with_retry(&client, &url).await;
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        assert!(response
            .text()
            .await
            .unwrap()
            .contains("Could not find requested path /nope"));

        server.handle.abort();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_fails_to_bind_to_used_port() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind first");
        let addr = listener.local_addr().expect("listener addr");

        let config = AxumDevServerConfig {
            addr,
            enable_ctrl_c: false,
        };
        let server = AxumDevServer::with_config(SnoyPredict::build_app(), config);
        let result = tokio::task::spawn_blocking(move || server.run()).await;

        match result {
            Ok(Err(err)) => assert!(
                err.to_string().contains("failed to bind"),
                "expected bind error, got: {err}"
            ),
            _ => panic!("expected bind error"),
        }

        drop(listener);
    }
}
