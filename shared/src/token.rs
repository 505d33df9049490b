//! Client-side reading of JWT expiry claims.
//!
//! Signatures are never checked here; the backend remains the authority on
//! whether a token is valid. The claims only drive refresh scheduling and
//! the early discard of sessions that have plainly run out.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{Result, SharedError};

/// How often the refresh loop wakes up.
pub const REFRESH_CHECK_INTERVAL_MS: u32 = 30 * 60 * 1000;

/// Refresh once fewer than this many seconds remain.
pub const REFRESH_THRESHOLD_SECS: i64 = 60 * 60;

#[derive(Debug, Default, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExpiry {
    ExpiresAt(DateTime<Utc>),
    /// A JWT without an `exp` claim.
    NoExpiry,
    /// Not a decodable JWT; the backend may be using opaque tokens.
    Opaque,
}

fn decode_claims(token: &str) -> Result<Claims> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(SharedError::InvalidToken("expected three segments".into())),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SharedError::InvalidToken(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn expiry(token: &str) -> TokenExpiry {
    match decode_claims(token) {
        Ok(Claims { exp: Some(exp) }) => match Utc.timestamp_opt(exp, 0).single() {
            Some(at) => TokenExpiry::ExpiresAt(at),
            None => TokenExpiry::Opaque,
        },
        Ok(Claims { exp: None }) => TokenExpiry::NoExpiry,
        Err(e) => {
            log::debug!("Token is not a readable JWT: {}", e);
            TokenExpiry::Opaque
        }
    }
}

/// Only tokens carrying an `exp` in the past count as expired.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    matches!(expiry(token), TokenExpiry::ExpiresAt(at) if at <= now)
}

/// `None` means the token has no known end.
pub fn time_remaining(token: &str, now: DateTime<Utc>) -> Option<Duration> {
    match expiry(token) {
        TokenExpiry::ExpiresAt(at) => Some((at - now).max(Duration::zero())),
        TokenExpiry::NoExpiry | TokenExpiry::Opaque => None,
    }
}

pub fn needs_refresh(token: &str, now: DateTime<Utc>) -> bool {
    time_remaining(token, now)
        .map(|left| left < Duration::seconds(REFRESH_THRESHOLD_SECS))
        .unwrap_or(false)
}
