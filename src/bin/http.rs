use std::net::SocketAddr;

use study_planner::http_api::{self, HTTP_ADDR_ENV};
use study_planner::{Planner, PlannerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let addr: SocketAddr = std::env::var(HTTP_ADDR_ENV)
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let planner = Planner::new(PlannerConfig::from_env()?)?;
    println!("study-planner HTTP API listening on http://{addr}");
    http_api::serve(addr, planner).await?;
    Ok(())
}
