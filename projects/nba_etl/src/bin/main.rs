use std::path::Path;

use projects_nba_etl::config;
use projects_nba_etl::jobs::teams::load::index::{run, LoadTeamsError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("LoadConfig: {source}")]
    LoadConfig {
        #[source]
        source: config::LoadConfigError,
    },
    #[error("LoadTeams: {source}")]
    LoadTeams {
        #[source]
        source: LoadTeamsError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.ini".to_string());
    let config = config::load(Path::new(&config_path))
        .map_err(|source| MainError::LoadConfig { source })?;

    let outcome = run(&config)
        .await
        .map_err(|source| MainError::LoadTeams { source })?;

    info!(
        "Teams load finished: {} page(s), {} team(s), {} row(s) appended",
        outcome.pages_fetched, outcome.teams_fetched, outcome.rows_appended
    );

    Ok(())
}
