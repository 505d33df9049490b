use gloo_net::http::Request;
use log::debug;
use shared::{
    CreateUserRequest, LoginUserRequest, LoginUserResponse, MessageResponse, RefreshResponse,
    SharedError, VerifyOutcome, VerifyResponse,
};
use validator::Validate;

use crate::api::utils::with_bearer;
use crate::api::{api_url, decode, failure, network_error};

pub async fn login(request: &LoginUserRequest) -> Result<LoginUserResponse, SharedError> {
    debug!("Attempting login for user: {}", request.email);
    request.validate()?;

    let response = Request::post(&api_url("/api/auth/login-user"))
        .json(request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize login request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    let login_response = decode::<LoginUserResponse>(response).await?;
    debug!("Login response received for user: {}", request.email);
    Ok(login_response)
}

/// Self-service registration. A 2xx with `success: false` is still a failure.
pub async fn create_user(request: &CreateUserRequest) -> Result<MessageResponse, SharedError> {
    debug!("Registering new account: {}", request.email);
    request.validate()?;

    let response = Request::post(&api_url("/api/auth/create-user"))
        .json(request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize register request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    let body = decode::<MessageResponse>(response).await?;
    if body.success {
        Ok(body)
    } else {
        Err(SharedError::Validation(
            body.message.unwrap_or_else(|| "Registration failed".to_string()),
        ))
    }
}

/// Asks the backend whether `token` is still accepted.
///
/// Only an explicit rejection revokes the session; an unreachable or
/// failing server leaves the decision to the local session check.
pub async fn verify(token: &str) -> VerifyOutcome {
    debug!("Verifying session with backend");
    let response = match with_bearer(Request::get(&api_url("/api/auth/verify")), token)
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            debug!("Session check request failed (network): {}", e);
            return VerifyOutcome::Unreachable;
        }
    };

    if response.status() == 401 || response.status() == 403 {
        return VerifyOutcome::Rejected;
    }

    if !response.ok() {
        debug!("Session check returned HTTP {}", response.status());
        return VerifyOutcome::Unreachable;
    }

    match response.json::<VerifyResponse>().await {
        Ok(body) if body.success => VerifyOutcome::Verified(body.user),
        Ok(_) => VerifyOutcome::Rejected,
        Err(e) => {
            debug!("Invalid verify response: {}", e);
            VerifyOutcome::Unreachable
        }
    }
}

/// Exchanges `token` for a fresh one. `Ok(None)` means the server kept the old token.
pub async fn refresh(token: &str) -> Result<Option<String>, SharedError> {
    debug!("Refreshing access token");
    let response = with_bearer(Request::post(&api_url("/api/auth/refresh")), token)
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(failure(response).await.0);
    }
    let body = response.json::<RefreshResponse>().await.unwrap_or_default();
    Ok(body.token.filter(|t| !t.trim().is_empty()))
}
