use crate::dto::tournament::ApplyRequest;
use crate::forms::rules::{self, LOOSE_EMAIL_REGEX, PHONE_REGEX};
use crate::forms::FieldErrors;

/// Team application for one tournament.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub tournament_id: String,
    pub team_name: String,
    pub captain_name: String,
    pub captain_email: String,
    pub captain_phone: String,
}

impl ApplicationForm {
    /// Updates one input by its wire name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "tournamentId" => self.tournament_id = value,
            "teamName" => self.team_name = value,
            "captainName" => self.captain_name = value,
            "captainEmail" => self.captain_email = value,
            "captainPhone" => self.captain_phone = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "tournamentId",
            rules::required(&self.tournament_id, "Please select a tournament"),
        );
        errors.check("teamName", rules::required(&self.team_name, "Team name is required"));
        errors.check(
            "captainName",
            rules::required(&self.captain_name, "Captain name is required"),
        );
        errors.check(
            "captainEmail",
            rules::required(&self.captain_email, "Email is required")
                .and_then(|_| rules::matches(&self.captain_email, &LOOSE_EMAIL_REGEX, "Invalid email format")),
        );
        errors.check(
            "captainPhone",
            rules::required(&self.captain_phone, "Phone number is required").and_then(|_| {
                rules::matches(&self.captain_phone, &PHONE_REGEX, "Invalid phone number (7-15 digits)")
            }),
        );
        errors
    }

    /// Tournament id and request body, or every field error.
    pub fn to_request(&self) -> Result<(String, ApplyRequest), FieldErrors> {
        self.validate().into_result()?;
        Ok((
            self.tournament_id.trim().to_string(),
            ApplyRequest {
                captain_name: self.captain_name.trim().to_string(),
                captain_email: self.captain_email.trim().to_string(),
                captain_phone: self.captain_phone.trim().to_string(),
                team_name: self.team_name.trim().to_string(),
            },
        ))
    }
}
