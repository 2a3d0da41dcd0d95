use anyhow::Result;
use linkedin_jobfinder::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = Config::from_file(&config_path)?;

    println!("Welcome to LinkedIn Job Finder!");

    let app = App::initialize(config).await?;
    let outcome = app.run().await;

    // Release the session on the fatal path too
    app.shutdown().await?;

    outcome
}
