use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::AppError;

/// Launch a headless browser session and open a blank page.
///
/// The CDP event handler runs on a background task for the lifetime of the
/// browser; the caller owns the `Browser` and is responsible for closing it
/// at the end of the run.
pub async fn launch_headless_browser() -> Result<(Browser, Page)> {
    info!("🚀 Launching headless browser...");

    let config = BrowserConfig::builder()
        .new_headless_mode()
        .args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ])
        .build()
        .map_err(|e| {
            error!("Failed to configure headless browser: {}", e);
            anyhow::anyhow!("failed to configure headless browser: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("Failed to launch headless browser: {}", e);
        AppError::launch_failed(e)
    })?;
    debug!("Headless browser launched");

    // Drive browser events in the background
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // Short pause to let the browser state sync
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("Failed to create page: {}", e);
        AppError::launch_failed(e)
    })?;
    debug!("Blank page created");

    Ok((browser, page))
}
