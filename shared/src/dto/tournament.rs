use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::ApiEnvelope;
use crate::forms::rules::{LOOSE_EMAIL_REGEX, PHONE_REGEX};
use crate::models::load_state::LoadState;
use crate::models::tournament::Tournament;

pub const LISTING_UNAVAILABLE: &str = "Unable to load tournaments. Please try again later.";
pub const LISTING_FAILED: &str = "Failed to fetch tournaments";

/// `data` of a tournament listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentList {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

/// Body of `POST /api/tournaments/:id/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[validate(length(min = 1, message = "Captain name is required"))]
    pub captain_name: String,
    #[validate(regex(path = "LOOSE_EMAIL_REGEX", message = "Invalid email format"))]
    pub captain_email: String,
    #[validate(regex(path = "PHONE_REGEX", message = "Invalid phone number (7-15 digits)"))]
    pub captain_phone: String,
    #[validate(length(min = 1, message = "Team name is required"))]
    pub team_name: String,
}

/// Turns a decoded listing response into what the page shows.
///
/// An empty listing for a named category is reported as an error so the
/// page can say which category came back empty.
pub fn listing_outcome(
    envelope: ApiEnvelope<TournamentList>,
    category: Option<&str>,
) -> LoadState<Vec<Tournament>> {
    if !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| LISTING_FAILED.to_string());
        return LoadState::Failed(message);
    }
    let tournaments = envelope.data.map(|d| d.tournaments).unwrap_or_default();
    match category.filter(|c| !c.is_empty()) {
        Some(c) if tournaments.is_empty() => {
            LoadState::Failed(format!("No tournaments found for {} category", c))
        }
        _ => LoadState::Loaded(tournaments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn envelope(raw: &str) -> ApiEnvelope<TournamentList> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn successful_listing_is_loaded() {
        let env = envelope(r#"{"success":true,"data":{"tournaments":[{"_id":"1","title":"Cup"}]}}"#);
        let state = listing_outcome(env, None);
        assert_eq!(state.data().map(Vec::len), Some(1));
    }

    #[test]
    fn empty_category_listing_names_the_category() {
        let env = envelope(r#"{"success":true,"data":{"tournaments":[]}}"#);
        assert_eq!(
            listing_outcome(env, Some("rugby")).error(),
            Some("No tournaments found for rugby category")
        );
        let env = envelope(r#"{"success":true,"data":{"tournaments":[]}}"#);
        assert!(listing_outcome(env, None).is_empty());
    }

    #[test]
    fn unsuccessful_listing_uses_server_message() {
        let env = envelope(r#"{"success":false,"message":"Category disabled"}"#);
        assert_eq!(listing_outcome(env, Some("soccer")).error(), Some("Category disabled"));
        let env = envelope(r#"{"success":false}"#);
        assert_eq!(listing_outcome(env, None).error(), Some(LISTING_FAILED));
    }

    #[test]
    fn apply_request_validates_contact_details() {
        let mut request = ApplyRequest {
            captain_name: "Usman".into(),
            captain_email: "usman@club.pk".into(),
            captain_phone: "+923001234567".into(),
            team_name: "Falcons".into(),
        };
        assert!(request.validate().is_ok());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["captainPhone"], "+923001234567");
        request.captain_phone = "123".into();
        assert!(request.validate().is_err());
    }
}
