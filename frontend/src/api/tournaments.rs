use log::{debug, error};
use shared::dto::tournament::{listing_outcome, LISTING_UNAVAILABLE};
use shared::{ApiEnvelope, ApplyRequest, LoadState, MessageResponse, SharedError, Tournament, TournamentList};
use validator::Validate;

use crate::api::cache::cached_request;
use crate::api::utils::{authenticated_get, authenticated_post};
use crate::api::{api_url, decode, failure, network_error};

/// Listing path for a category, or for every tournament.
pub fn listing_path(category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(c) => format!("/api/tournaments/{}", urlencoding::encode(c)),
        None => "/api/all-tournaments".to_string(),
    }
}

async fn fetch_listing_body(path: &str) -> Result<String, SharedError> {
    let response = authenticated_get(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    // Only 2xx bodies are cached.
    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(SharedError::Server { status, message: text })
    }
}

/// Page state for a listing fetch. A failed request of any kind, including a
/// non-2xx answer with a JSON body, reads as unavailable.
pub fn listing_state(body: Result<String, SharedError>, category: Option<&str>) -> LoadState<Vec<Tournament>> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to fetch tournaments: {}", e);
            return LoadState::Failed(LISTING_UNAVAILABLE.to_string());
        }
    };
    match serde_json::from_str::<ApiEnvelope<TournamentList>>(&body) {
        Ok(envelope) => listing_outcome(envelope, category),
        Err(e) => {
            error!("Failed to parse tournament listing: {}", e);
            LoadState::Failed(LISTING_UNAVAILABLE.to_string())
        }
    }
}

/// Tournaments for a category page, with the page's error wording applied.
pub async fn list(category: Option<&str>) -> LoadState<Vec<Tournament>> {
    let path = listing_path(category);
    debug!("Fetching tournaments from {}", path);
    listing_state(cached_request(&path, || fetch_listing_body(&path)).await, category)
}

/// Every tournament, for the application form's picker.
pub async fn all() -> Result<Vec<Tournament>, SharedError> {
    let path = listing_path(None);
    let body = cached_request(&path, || fetch_listing_body(&path)).await?;
    let envelope: ApiEnvelope<TournamentList> = serde_json::from_str(&body)?;
    if !envelope.success {
        return Err(SharedError::Validation(
            envelope.message.unwrap_or_else(|| "Failed to fetch tournaments".to_string()),
        ));
    }
    Ok(envelope.data.map(|d| d.tournaments).unwrap_or_default())
}

pub async fn apply(tournament_id: &str, request: &ApplyRequest) -> Result<MessageResponse, SharedError> {
    request.validate()?;
    debug!("Submitting application for tournament {}", tournament_id);
    let url = api_url(&format!("/api/tournaments/{}/apply", urlencoding::encode(tournament_id)));
    let response = authenticated_post(&url)
        .json(request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize application: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(failure(response).await.0);
    }
    decode::<MessageResponse>(response).await
}
