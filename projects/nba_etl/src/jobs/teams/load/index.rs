use interfaces_free_nba_teams::index::{
    fetch_teams_page, FetchTeamsPageError, TeamsPageResult};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::db;
use crate::db::teams::queries::{append_teams, AppendTeamsError, TEAMS_TABLE};
use crate::utils::data_processing::{parse_teams_page, Frame, ParseTeamsPageError};
use crate::utils::table::render_frame;

/// First page requested from the listing.
const FIRST_PAGE: u32 = 0;
/// Records requested per page.
const PER_PAGE: u32 = 100;

#[derive(Debug)]
pub struct LoadOutcome {
    pub pages_fetched: u32,
    pub teams_fetched: usize,
    pub rows_appended: u64,
}

#[derive(Debug, Error)]
pub enum FetchAllTeamsError {
    #[error("FetchTeamsPage: {source}")]
    FetchTeamsPage {
        #[from]
        source: FetchTeamsPageError,
    },

    #[error("UpstreamStatus {status}: {body}")]
    UpstreamStatus {
        status: StatusCode,
        body: String,
    },

    #[error("ParseTeamsPage: {source}")]
    ParseTeamsPage {
        #[from]
        source: ParseTeamsPageError,
    },
}

/// Pages through the upstream teams listing and accumulates every record.
/// The cursor comes from each response's `meta.next_page`; a response
/// without one ends the loop.
pub async fn fetch_all_teams(
    config: &AppConfig,
) -> Result<(Vec<Map<String, Value>>, u32), FetchAllTeamsError> {
    let mut records = Vec::new();
    let mut pages_fetched = 0;
    let mut page = FIRST_PAGE;

    loop {
        let TeamsPageResult { body, status } = fetch_teams_page(
            &config.api.base_url,
            &config.api.key,
            &config.api.host,
            page,
            PER_PAGE,
        )
        .await?;

        if !status.is_success() {
            return Err(FetchAllTeamsError::UpstreamStatus { status, body });
        }

        let parsed = parse_teams_page(&body)?;
        records.extend(parsed.records);
        pages_fetched += 1;

        match parsed.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok((records, pages_fetched))
}

#[derive(Debug, Error)]
pub enum LoadTeamsError {
    #[error("FetchAllTeams: {source}")]
    FetchAllTeams {
        #[from]
        source: FetchAllTeamsError,
    },

    #[error("ConnectDatabase: {source}")]
    ConnectDatabase {
        #[from]
        source: db::ConnectDatabaseError,
    },

    #[error("AppendTeams: {source}")]
    AppendTeams {
        #[from]
        source: AppendTeamsError,
    },
}

/// Runs the one-shot extract-and-load: fetch every page, print the flattened
/// table, then append the rows to the destination table. The table is
/// printed before the database is touched, so a successful fetch stays
/// observable when the load fails.
pub async fn run(config: &AppConfig) -> Result<LoadOutcome, LoadTeamsError> {
    let (records, pages_fetched) = fetch_all_teams(config).await?;
    info!(
        "Fetched {} team(s) over {} page(s)",
        records.len(),
        pages_fetched
    );

    let frame = Frame::from_records(&records);
    println!("{}", render_frame(&frame));

    let pool = db::connect(&config.db.connection_url()).await?;
    let rows_appended = append_teams(&pool, &frame).await?;
    pool.close().await;

    info!("Appended {} row(s) to `{}`", rows_appended, TEAMS_TABLE);

    Ok(LoadOutcome {
        pages_fetched,
        teams_fetched: records.len(),
        rows_appended,
    })
}
