//! Application lifecycle
//!
//! Owns the scarce resources of a run: the browser session and the concrete
//! driver. `initialize` acquires them, `run` drives login → aggregation →
//! export → summary, and `shutdown` releases the session — callers invoke it
//! on the fatal path too, so partial results are exported and reported
//! before the error propagates.

use std::time::Instant;

use anyhow::Result;
use chromiumoxide::Browser;
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::CdpDriver;
use crate::models::RunTotals;
use crate::orchestrator::aggregator;
use crate::services::{ExportSink, LoginService};
use crate::workflow::LocationRunner;

pub struct App {
    config: Config,
    browser: Browser,
    driver: CdpDriver,
}

impl App {
    /// Acquire the browser session.
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let (browser, page) = browser::launch_headless_browser().await?;
        let driver = CdpDriver::new(page);

        Ok(Self {
            config,
            browser,
            driver,
        })
    }

    /// Run the whole job search.
    ///
    /// Exports whatever was accumulated and prints the summary even when a
    /// fatal error cut the run short; the error is returned afterwards.
    pub async fn run(&self) -> Result<()> {
        let started = Instant::now();

        let login = LoginService::new(&self.config.username, &self.config.password);
        login.login(&self.driver).await?;

        let runner = LocationRunner::new(&self.config);
        let locations = self.config.facets();
        let outcome = aggregator::aggregate(&self.driver, &runner, &locations).await;

        if outcome.failure.is_some() && !outcome.records.is_empty() {
            warn!(
                "Run aborted early; exporting the {} records gathered so far",
                outcome.records.len()
            );
        }

        let sink = ExportSink::new(&self.config.csv_output, &self.config.xlsx_output);
        let export_result = sink.export(&outcome.records);
        if let Err(e) = &export_result {
            error!("Export failed: {}", e);
        }

        print_run_summary(&outcome.totals, started.elapsed().as_secs_f64());

        if let Some(failure) = outcome.failure {
            return Err(failure);
        }
        export_result?;
        Ok(())
    }

    /// Release the browser session.
    pub async fn shutdown(mut self) -> Result<()> {
        info!("Closing browser session");
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        Ok(())
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 Job finder run starting - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "📋 {} locations, query: '{}'",
        config.locations.len(),
        config.search_query
    );
    info!("{}", "=".repeat(60));
}

fn print_run_summary(totals: &RunTotals, elapsed_secs: f64) {
    println!("\n=== Summary ===");
    println!("Total jobs considered: {}", totals.considered);
    println!("Total jobs chosen: {}", totals.chosen);
    println!("Total time elapsed: {:.2} seconds", elapsed_secs);
}
