use log::debug;
use shared::{
    CreateOrganizerRequest, FieldErrors, MessageResponse, Organizer, OrganizerPayload,
    OrganizerStatus, SharedError,
};
use validator::Validate;

use crate::api::utils::{authenticated_delete, authenticated_get, authenticated_post, authenticated_put};
use crate::api::{api_url, decode, failure, network_error};

/// A rejected add-organizer request: the error plus any per-field messages.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOrganizerError {
    pub error: SharedError,
    pub fields: FieldErrors,
}

impl From<SharedError> for AddOrganizerError {
    fn from(error: SharedError) -> Self {
        Self { error, fields: FieldErrors::default() }
    }
}

pub async fn list() -> Result<Vec<Organizer>, SharedError> {
    debug!("Fetching organizers");
    let response = authenticated_get(&api_url("/api/admin/get-all-organizor"))
        .send()
        .await
        .map_err(network_error)?;
    let payload = decode::<OrganizerPayload>(response).await?;
    Ok(payload.into_vec())
}

pub async fn add(request: &CreateOrganizerRequest) -> Result<MessageResponse, AddOrganizerError> {
    request.validate().map_err(SharedError::from)?;
    debug!("Adding organizer {}", request.email);
    let response = authenticated_post(&api_url("/api/admin/add-organizor"))
        .json(request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize organizer: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        let (error, body) = failure(response).await;
        return Err(AddOrganizerError { error, fields: body.field_errors() });
    }
    Ok(decode::<MessageResponse>(response).await?)
}

/// Activates or deactivates an organizer to match `status`.
pub async fn set_status(id: &str, status: OrganizerStatus) -> Result<(), SharedError> {
    let action = match status {
        OrganizerStatus::Active => "activate-organizor",
        OrganizerStatus::Inactive => "inactivate-organizor",
    };
    debug!("{} {}", action, id);
    let url = api_url(&format!("/api/admin/{}/{}", action, urlencoding::encode(id)));
    let response = authenticated_put(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(failure(response).await.0);
    }
    Ok(())
}

pub async fn delete(id: &str) -> Result<(), SharedError> {
    debug!("Deleting organizer {}", id);
    let url = api_url(&format!("/api/admin/{}", urlencoding::encode(id)));
    let response = authenticated_delete(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(failure(response).await.0);
    }
    Ok(())
}
