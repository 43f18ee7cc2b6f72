use reqwest::{Client, StatusCode};
use thiserror::Error;

pub struct TeamsPageResult {
    pub body: String,
    pub status: StatusCode,
}

pub async fn fetch_teams_page(
    base_url: &str,
    api_key: &str,
    api_host: &str,
    page: u32,
    per_page: u32,
) -> Result<TeamsPageResult, FetchTeamsPageError> {
    let url = format!("{base_url}/teams");

    let client = Client::new();

    let response = client
        .get(&url)
        .header("X-RapidAPI-Key", api_key)
        .header("X-RapidAPI-Host", api_host)
        .query(&[("page", page), ("per_page", per_page)])
        .send()
        .await
        .map_err(|source| FetchTeamsPageError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchTeamsPageError::ResponseRead { source })?;

    Ok(TeamsPageResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchTeamsPageError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
