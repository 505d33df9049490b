use serde::{Deserialize, Serialize};
use std::fmt;

/// Cookie holding the opaque access token.
pub const AUTH_COOKIE: &str = "authToken";
/// localStorage key holding the cached [`SessionUser`] as JSON.
pub const USER_KEY: &str = "user";
/// localStorage key holding the ISO-8601 time of the last login.
pub const LAST_LOGIN_KEY: &str = "lastLogin";
/// Older builds also kept the token in localStorage under this key.
pub const LEGACY_TOKEN_KEY: &str = "authToken";
/// Lifetime of the auth cookie: seven days.
pub const SESSION_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

pub const HOME_PATH: &str = "/";
pub const PANEL_PATH: &str = "/panel";

/// Account role as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Organizer,
    Company,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organizer => "organizor",
            Role::Company => "company",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Organizer => "Organizor",
            Role::Company => "Company",
            Role::User => "User",
        }
    }

    /// Admins pass every role check; everyone else must match exactly.
    pub fn satisfies(&self, required: &Role) -> bool {
        *self == Role::Admin || self == required
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "organizor" | "organizer" => Role::Organizer,
            "company" => Role::Company,
            _ => Role::User,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile cached in localStorage after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl SessionUser {
    /// A cached profile is usable only with both an id and an email.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Overlays the fields a verification response sent back.
    pub fn merge(&mut self, update: &UserUpdate) {
        if let Some(id) = update.id.as_ref().filter(|v| !v.is_empty()) {
            self.id = id.clone();
        }
        if let Some(email) = update.email.as_ref().filter(|v| !v.is_empty()) {
            self.email = email.clone();
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(role) = &update.role {
            self.role = Role::from(role.as_str());
        }
        if let Some(created_at) = &update.created_at {
            self.created_at = Some(created_at.clone());
        }
    }

    /// First letter of the display name, used for avatars.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .chain(self.email.chars())
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Partial profile as returned by `GET /api/auth/verify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// The client-held belief that someone is logged in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    /// Builds a session only when a non-empty token and a valid user are both present.
    pub fn from_parts(token: Option<String>, user: Option<SessionUser>) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        let user = user.filter(SessionUser::is_valid)?;
        Some(Self { token, user })
    }

    pub fn role(&self) -> &Role {
        &self.user.role
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Where a freshly authenticated visitor lands by default.
    pub fn landing_path(&self) -> &'static str {
        if self.is_admin() {
            PANEL_PATH
        } else {
            HOME_PATH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn user(id: &str, role: Role) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            email: "captain@arena.test".to_string(),
            name: "Captain".to_string(),
            role,
            created_at: None,
        }
    }

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("ADMIN", Role::Admin)]
    #[case("organizor", Role::Organizer)]
    #[case("organizer", Role::Organizer)]
    #[case("company", Role::Company)]
    #[case("user", Role::User)]
    #[case("superuser", Role::User)]
    #[case("", Role::User)]
    fn role_parsing_is_lenient(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::from(raw), expected);
    }

    #[test]
    fn admin_satisfies_every_role() {
        assert!(Role::Admin.satisfies(&Role::Organizer));
        assert!(Role::Organizer.satisfies(&Role::Organizer));
        assert!(!Role::User.satisfies(&Role::Admin));
        assert!(!Role::Company.satisfies(&Role::Organizer));
    }

    #[test]
    fn session_requires_token_and_user_id() {
        assert!(Session::from_parts(Some("tok".into()), Some(user("u1", Role::User))).is_some());
        assert!(Session::from_parts(None, Some(user("u1", Role::User))).is_none());
        assert!(Session::from_parts(Some("  ".into()), Some(user("u1", Role::User))).is_none());
        assert!(Session::from_parts(Some("tok".into()), None).is_none());
        assert!(Session::from_parts(Some("tok".into()), Some(user("", Role::User))).is_none());
    }

    #[test]
    fn landing_path_depends_on_role() {
        let admin = Session::from_parts(Some("t".into()), Some(user("a", Role::Admin))).unwrap();
        let player = Session::from_parts(Some("t".into()), Some(user("p", Role::User))).unwrap();
        assert_eq!(admin.landing_path(), "/panel");
        assert_eq!(player.landing_path(), "/");
    }

    #[test]
    fn stored_user_json_round_trips_in_camel_case() {
        let raw = r#"{"id":"66a1","email":"a@b.co","name":"Ali","role":"admin","createdAt":"2025-01-01T00:00:00Z"}"#;
        let parsed: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.role, Role::Admin);
        assert_eq!(parsed.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["role"], "admin");
        assert_eq!(back["createdAt"], "2025-01-01T00:00:00Z");
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let parsed: SessionUser = serde_json::from_str(r#"{"id":"1","email":"a@b.co"}"#).unwrap();
        assert_eq!(parsed.role, Role::User);
    }

    #[test]
    fn verification_update_overlays_existing_profile() {
        let mut cached = user("u1", Role::User);
        cached.merge(&UserUpdate {
            name: Some("Renamed".into()),
            role: Some("organizor".into()),
            ..Default::default()
        });
        assert_eq!(cached.name, "Renamed");
        assert_eq!(cached.role, Role::Organizer);
        assert_eq!(cached.id, "u1");
        assert_eq!(cached.email, "captain@arena.test");
    }
}
