use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use log::debug;
use thiserror::Error;
use tokio::task::JoinHandle;

use super::{FetchResult, Fetcher, USER_AGENT};

/// Pause after navigation so late client-rendered content has a chance to
/// land before the document is read.
const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Failures inside the rendered-fetch tier. These never cross the import
/// boundary: the escalation controller logs them and falls back to
/// whatever result it already has.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to launch browser: {0}. Is Chrome or Chromium installed and in PATH?")]
    Launch(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Failed to read rendered document: {0}")]
    Content(String),

    #[error("Render timed out after {0:?}")]
    Timeout(Duration),
}

/// Headless-browser fetcher. Executes the page's JavaScript and returns
/// the rendered document, at 10-100x the cost of a plain fetch.
///
/// A fresh browser is launched per call and torn down on every exit path
/// (success, failure, timeout); there is no shared browser handle.
pub struct ChromeFetcher {
    timeout: Duration,
}

impl ChromeFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        Self { timeout }
    }
}

impl Default for ChromeFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Fetcher for ChromeFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_with_backend(&ChromeBackend, url, self.timeout).await
    }
}

/// Acquires a browser session. The seam exists so the acquire/render/
/// release discipline can be exercised without a Chrome binary.
#[async_trait]
trait RenderBackend: Send + Sync {
    type Session: RenderSession;

    async fn launch(&self) -> Result<Self::Session, RenderError>;
}

#[async_trait]
trait RenderSession: Send {
    async fn render(&mut self, url: &str) -> Result<String, RenderError>;

    /// Releases the session's resources. Called exactly once per session,
    /// whatever `render` did.
    async fn shutdown(&mut self);
}

/// The render itself runs under the timeout; the teardown does not, and
/// happens on every exit path.
async fn fetch_with_backend<B: RenderBackend>(
    backend: &B,
    url: &str,
    timeout: Duration,
) -> FetchResult {
    let mut session = backend.launch().await?;

    let result = tokio::time::timeout(timeout, session.render(url)).await;
    session.shutdown().await;

    match result {
        Ok(Ok(html)) => Ok(html),
        Ok(Err(e)) => Err(Box::new(e) as _),
        Err(_) => Err(Box::new(RenderError::Timeout(timeout)) as _),
    }
}

struct ChromeBackend;

struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

#[async_trait]
impl RenderBackend for ChromeBackend {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession, RenderError> {
        let config = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(RenderError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while handler.next().await.is_some() {
                // Drain browser events
            }
        });

        Ok(ChromeSession {
            browser,
            handler_task,
        })
    }
}

#[async_trait]
impl RenderSession for ChromeSession {
    async fn render(&mut self, url: &str) -> Result<String, RenderError> {
        // Open a blank page first: the User-Agent must be in place before
        // the navigation request goes out, and new_page(url) navigates
        // immediately
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        page.set_user_agent(USER_AGENT)
            .await
            .map_err(|e| RenderError::Navigation(format!("Failed to set user agent: {e}")))?;

        page.goto(url)
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        tokio::time::sleep(SETTLE_DELAY).await;

        let html = page
            .content()
            .await
            .map_err(|e| RenderError::Content(e.to_string()))?;

        if let Err(e) = page.close().await {
            debug!("Page close reported: {e}");
        }

        Ok(html)
    }

    async fn shutdown(&mut self) {
        if let Err(e) = self.browser.close().await {
            debug!("Browser close reported: {e}");
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}
