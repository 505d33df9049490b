use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, SharedError};
use crate::models::consent::{ConsentChoice, COOKIE_CONSENT_KEY, COOKIE_DATE_KEY, USER_CONSENT_KEY};
use crate::models::session::{
    Session, SessionUser, AUTH_COOKIE, LAST_LOGIN_KEY, LEGACY_TOKEN_KEY, SESSION_MAX_AGE_SECS, USER_KEY,
};
use crate::token;

/// Client-side persistence: cookies plus a string key/value store.
pub trait SessionStorage {
    fn read_cookie(&self, name: &str) -> Option<String>;
    fn write_cookie(&self, name: &str, value: &str, max_age_secs: i64);
    fn remove_cookie(&self, name: &str);
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str);
}

/// Finds one cookie in a `document.cookie` style header.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Assignment string that sets a cookie for the whole site.
pub fn cookie_assignment(name: &str, value: &str, max_age_secs: i64) -> String {
    format!("{}={}; path=/; max-age={}; SameSite=Lax", name, value, max_age_secs)
}

/// Assignment string that expires a cookie immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/; SameSite=Lax", name)
}

/// Reads and writes the session on top of any [`SessionStorage`].
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.read_cookie(AUTH_COOKIE)
    }

    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) if user.is_valid() => Some(user),
            Ok(_) => {
                warn!("Stored user is missing id or email");
                None
            }
            Err(e) => {
                warn!("Failed to parse stored user: {}", e);
                None
            }
        }
    }

    /// Current session, if one is present and its token has not run out.
    pub fn load(&self, now: DateTime<Utc>) -> Option<Session> {
        let session = Session::from_parts(self.token(), self.user())?;
        if token::is_expired(&session.token, now) {
            debug!("Stored token has expired, clearing session");
            self.clear();
            return None;
        }
        Some(session)
    }

    /// Writes the profile first and the cookie last, so a visible cookie
    /// always has a profile behind it.
    pub fn persist(&self, session: &Session, now: DateTime<Utc>) -> Result<()> {
        self.update_user(&session.user)?;
        self.storage
            .set_item(LAST_LOGIN_KEY, &now.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        self.storage.write_cookie(AUTH_COOKIE, &session.token, SESSION_MAX_AGE_SECS);
        Ok(())
    }

    pub fn update_user(&self, user: &SessionUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(USER_KEY, &json)
    }

    pub fn replace_token(&self, token: &str) {
        self.storage.write_cookie(AUTH_COOKIE, token, SESSION_MAX_AGE_SECS);
    }

    pub fn clear(&self) {
        self.storage.remove_cookie(AUTH_COOKIE);
        self.storage.remove_item(USER_KEY);
        self.storage.remove_item(LAST_LOGIN_KEY);
        self.storage.remove_item(LEGACY_TOKEN_KEY);
        debug!("Auth data cleared");
    }

    pub fn consent(&self) -> Option<ConsentChoice> {
        self.storage
            .get_item(COOKIE_CONSENT_KEY)
            .as_deref()
            .and_then(ConsentChoice::parse)
    }

    pub fn user_consent(&self) -> Option<String> {
        self.storage.get_item(USER_CONSENT_KEY)
    }

    /// Records the banner answer under both the banner key and the analytics gate.
    pub fn record_consent(&self, choice: ConsentChoice, now: DateTime<Utc>) -> Result<()> {
        self.storage.set_item(COOKIE_CONSENT_KEY, choice.as_str())?;
        self.storage.set_item(USER_CONSENT_KEY, choice.as_str())?;
        if choice == ConsentChoice::Accepted {
            self.storage
                .set_item(COOKIE_DATE_KEY, &now.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cookies: RefCell<HashMap<String, String>>,
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes, like a browser with storage disabled.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.borrow().contains_key(name)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    fn read_cookie(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned().filter(|v| !v.is_empty())
    }

    fn write_cookie(&self, name: &str, value: &str, max_age_secs: i64) {
        if max_age_secs <= 0 {
            self.remove_cookie(name);
        } else {
            self.cookies.borrow_mut().insert(name.to_string(), value.to_string());
        }
    }

    fn remove_cookie(&self, name: &str) {
        self.cookies.borrow_mut().remove(name);
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(SharedError::Storage(format!("cannot write {}", key)));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
