use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::rules::{CONTACT_REGEX, STRICT_EMAIL_REGEX};
use crate::models::organizer::Organizer;
use crate::models::session::Role;

/// Body of `POST /api/admin/add-organizor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizerRequest {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(regex(path = "STRICT_EMAIL_REGEX"))]
    pub email: String,
    #[validate(regex(path = "CONTACT_REGEX"))]
    pub contact: String,
    #[validate(length(min = 10))]
    pub street_address: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub zip_code: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Role,
}

/// The organizer list arrives either wrapped or bare depending on the backend build.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrganizerPayload {
    Wrapped {
        #[serde(alias = "organizers", alias = "data")]
        organizors: Vec<Organizer>,
    },
    List(Vec<Organizer>),
}

impl OrganizerPayload {
    pub fn into_vec(self) -> Vec<Organizer> {
        match self {
            OrganizerPayload::Wrapped { organizors } => organizors,
            OrganizerPayload::List(list) => list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_list_shapes_decode() {
        let wrapped: OrganizerPayload =
            serde_json::from_str(r#"{"organizors":[{"_id":"1","name":"Ahmed"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec()[0].name, "Ahmed");
        let bare: OrganizerPayload =
            serde_json::from_str(r#"[{"_id":"1","name":"Sara"},{"_id":"2","name":"Ali"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 2);
    }

    #[test]
    fn request_carries_organizer_role() {
        let request = CreateOrganizerRequest {
            name: "Events Co".into(),
            email: "events@co.pk".into(),
            contact: "+92 300 1234567".into(),
            street_address: "12 Canal Bank Road".into(),
            state: "Punjab".into(),
            zip_code: "54000".into(),
            password: "Secret123".into(),
            role: Role::Organizer,
        };
        assert!(request.validate().is_ok());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "organizor");
        assert_eq!(json["zipCode"], "54000");
        assert_eq!(json["streetAddress"], "12 Canal Bank Road");
    }
}
