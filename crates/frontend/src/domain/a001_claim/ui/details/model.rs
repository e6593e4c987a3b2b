use crate::shared::api_utils::{api_url, resource_path};
use contracts::domain::a001_claim::aggregate::Claim;
use contracts::enums::ClaimAction;
use gloo_net::http::Request;
use thiserror::Error;

const CLAIMS_API: &str = "/api/claims";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClaimFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Claim not found")]
    NotFound,

    #[error("Server error: HTTP {0}")]
    Http(u16),

    #[error("Failed to parse claim: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ClaimFetchError {
    fn from(e: gloo_net::Error) -> Self {
        ClaimFetchError::Network(e.to_string())
    }
}

/// Map a response status to an error, 2xx passes
pub fn check_status(status: u16) -> Result<(), ClaimFetchError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(ClaimFetchError::NotFound),
        other => Err(ClaimFetchError::Http(other)),
    }
}

pub fn parse_claim(text: &str) -> Result<Claim, ClaimFetchError> {
    serde_json::from_str(text).map_err(|e| ClaimFetchError::Parse(e.to_string()))
}

pub fn claim_path(claim_id: &str) -> String {
    resource_path(CLAIMS_API, claim_id)
}

pub fn action_path(claim_id: &str, action: ClaimAction) -> String {
    format!("{}/{}", claim_path(claim_id), action.endpoint())
}

pub async fn fetch_claim(claim_id: &str) -> Result<Claim, ClaimFetchError> {
    let url = api_url(&claim_path(claim_id));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    check_status(response.status())?;

    let text = response.text().await?;
    parse_claim(&text)
}

pub async fn post_claim_action(claim_id: &str, action: ClaimAction) -> Result<(), ClaimFetchError> {
    let url = api_url(&action_path(claim_id, action));
    log::debug!("POST {}", url);

    let response = Request::post(&url).send().await?;
    check_status(response.status())
}
