//! Test server harness for E2E testing
//!
//! Provides `TestLcServer` for spawning real Life Calendar server instances
//! in tests.

use lc_service::observability::metrics::PrometheusMetrics;
use lc_service::routes::{self, AppState};
use lc_service::templates::{PageRenderer, TemplateEngine};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the Life Calendar server in E2E tests.
///
/// Each instance owns its own metrics recorder, so observations from one
/// test never show up in another test's `/metrics` output.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_page_e2e() -> Result<()> {
///     let server = TestLcServer::spawn().await?;
///
///     let response = reqwest::get(format!("{}/?age=1", server.url())).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestLcServer {
    addr: SocketAddr,
    metrics: Arc<PrometheusMetrics>,
    _handle: JoinHandle<()>,
}

impl TestLcServer {
    /// Spawn a server with the embedded calendar template.
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let engine = TemplateEngine::new()
            .map_err(|e| anyhow::anyhow!("Failed to load template: {}", e))?;
        Self::spawn_with_renderer(Arc::new(engine)).await
    }

    /// Spawn a server using `renderer` for the calendar page.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn_with_renderer(
        renderer: Arc<dyn PageRenderer>,
    ) -> Result<Self, anyhow::Error> {
        let metrics = Arc::new(
            PrometheusMetrics::new()
                .map_err(|e| anyhow::anyhow!("Failed to create metrics: {}", e))?,
        );

        let state = Arc::new(AppState { renderer });

        // Build routes using lc-service's real route builder
        let app = routes::build_routes(state, metrics.clone(), metrics.handle());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            metrics,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Current Prometheus exposition text for this server.
    pub fn metrics_snapshot(&self) -> String {
        self.metrics.handle().render()
    }
}

impl Drop for TestLcServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so it does not outlive the test.
        self._handle.abort();
    }
}
