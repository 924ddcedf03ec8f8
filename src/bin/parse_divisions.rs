use dotenv::dotenv;
use wikipedia_divisions::prelude::*;
use wikipedia_divisions::service::scrape_service::run_divisions;
use wikipedia_divisions::service::var_service::ScrapeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    dotenv().ok();

    let config = ScrapeConfig::from_env().await?;
    run_divisions(&config).await?;

    Ok(())
}
