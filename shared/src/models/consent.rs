use serde::{Deserialize, Serialize};

/// Answer given on the cookie banner.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";
/// When the banner was accepted.
pub const COOKIE_DATE_KEY: &str = "cookieDate";
/// Gate read by the analytics wrapper.
pub const USER_CONSENT_KEY: &str = "userConsent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentChoice {
    Accepted,
    Rejected,
}

impl ConsentChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_matches('"') {
            "accepted" => Some(ConsentChoice::Accepted),
            "rejected" => Some(ConsentChoice::Rejected),
            _ => None,
        }
    }
}

/// Analytics may run only on an explicit "accepted".
pub fn analytics_allowed(user_consent: Option<&str>) -> bool {
    user_consent.and_then(ConsentChoice::parse) == Some(ConsentChoice::Accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_acceptance_enables_analytics() {
        assert!(analytics_allowed(Some("accepted")));
        assert!(analytics_allowed(Some("\"accepted\"")));
        assert!(!analytics_allowed(Some("rejected")));
        assert!(!analytics_allowed(Some("yes")));
        assert!(!analytics_allowed(None));
    }
}
