use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SharedError;
use crate::models::session::{Role, Session, SessionUser, UserUpdate};

/// Body of `POST /api/auth/login-user`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub password: String,
}

/// The user object inside a login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl ApiUser {
    /// Profile to cache; a missing role means "user" and a missing creation
    /// time falls back to the supplied login time.
    pub fn into_session_user(self, fallback_created_at: &str) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_deref().map(Role::from).unwrap_or_default(),
            created_at: Some(self.created_at.unwrap_or_else(|| fallback_created_at.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserData {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
    pub user: Option<ApiUser>,
}

/// `{ data: { accessToken, user } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserResponse {
    #[serde(default)]
    pub data: Option<LoginUserData>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginUserResponse {
    /// The session this response establishes, if it carries both a token and a usable user.
    pub fn into_session(self, login_time: &str) -> Option<Session> {
        let data = self.data?;
        let user = data.user.map(|u| u.into_session_user(login_time));
        Session::from_parts(data.access_token, user)
    }
}

/// `GET /api/auth/verify` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserUpdate>,
}

/// `POST /api/auth/refresh` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /api/auth/create-user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Role,
    #[validate(length(min = 1))]
    pub street_address: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(range(min = 10000, max = 999999))]
    pub zipcode: u32,
}

/// Banner text for a failed login attempt.
pub fn login_error_message(status: Option<u16>, server_message: Option<&str>) -> String {
    match status {
        Some(401) => "Invalid email or password.".to_string(),
        Some(404) => "Account not found. Please sign up.".to_string(),
        Some(403) => "Account is disabled. Contact support.".to_string(),
        _ => server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Connection failed. Please try again.".to_string()),
    }
}

/// [`login_error_message`] for a failed login request.
pub fn login_failure(error: &SharedError) -> String {
    login_error_message(error.status(), error.server_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn login_response_becomes_session() {
        let raw = r#"{"data":{"accessToken":"tok-1","user":{"_id":"u9","email":"a@b.co","name":"Ayesha","role":"admin"}}}"#;
        let response: LoginUserResponse = serde_json::from_str(raw).unwrap();
        let session = response.into_session("2025-01-01T00:00:00.000Z").unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user.id, "u9");
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.user.created_at.as_deref(), Some("2025-01-01T00:00:00.000Z"));
    }

    #[test]
    fn login_response_without_token_is_rejected() {
        let raw = r#"{"data":{"user":{"_id":"u9","email":"a@b.co"}}}"#;
        let response: LoginUserResponse = serde_json::from_str(raw).unwrap();
        assert!(response.into_session("now").is_none());
        let empty: LoginUserResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_session("now").is_none());
    }

    #[test_case(Some(401), None, "Invalid email or password.")]
    #[test_case(Some(404), None, "Account not found. Please sign up.")]
    #[test_case(Some(403), Some("ignored"), "Account is disabled. Contact support.")]
    #[test_case(Some(500), Some("Database down"), "Database down")]
    #[test_case(None, None, "Connection failed. Please try again.")]
    #[test_case(Some(502), Some("  "), "Connection failed. Please try again.")]
    fn login_errors(status: Option<u16>, server: Option<&str>, expected: &str) {
        assert_eq!(login_error_message(status, server), expected);
    }

    #[test]
    fn failures_map_through_status() {
        assert_eq!(
            login_failure(&SharedError::from_status(401, "bad password")),
            "Invalid email or password."
        );
        assert_eq!(
            login_failure(&SharedError::Network("offline".into())),
            "Connection failed. Please try again."
        );
        assert_eq!(login_failure(&SharedError::from_status(400, "Email not verified")), "Email not verified");
    }

    #[test]
    fn signup_payload_uses_wire_names() {
        let request = CreateUserRequest {
            name: "Ali".into(),
            email: "ali@x.io".into(),
            password: "Secret123".into(),
            role: Role::Company,
            street_address: "1 Mall Road".into(),
            state: "Punjab".into(),
            zipcode: 54000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["streetAddress"], "1 Mall Road");
        assert_eq!(json["role"], "company");
        assert_eq!(json["zipcode"], 54000);
    }
}
