use crate::dto::organizer::CreateOrganizerRequest;
use crate::forms::rules::{self, CONTACT_REGEX, STRICT_EMAIL_REGEX};
use crate::forms::FieldErrors;
use crate::models::session::Role;

/// Admin form for adding an organizer account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizerForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub street_address: String,
    pub state: String,
    pub zip_code: String,
    pub password: String,
}

impl OrganizerForm {
    /// Updates one input and clears its error.
    pub fn set_field(&mut self, name: &str, value: String, errors: &mut FieldErrors) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "contact" => self.contact = value,
            "streetAddress" => self.street_address = value,
            "state" => self.state = value,
            "zipCode" => self.zip_code = value,
            "password" => self.password = value,
            _ => return,
        }
        errors.remove(name);
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            rules::required(&self.name, "Name is required")
                .and_then(|_| rules::min_chars(&self.name, 3, "Name must be at least 3 characters")),
        );
        errors.check(
            "email",
            rules::required(&self.email, "Email is required").and_then(|_| {
                rules::matches(&self.email, &STRICT_EMAIL_REGEX, "Please enter a valid email address")
            }),
        );
        errors.check(
            "contact",
            rules::required(&self.contact, "Contact number is required").and_then(|_| {
                rules::matches(&self.contact, &CONTACT_REGEX, "Please enter a valid contact number")
            }),
        );
        errors.check(
            "streetAddress",
            rules::required(&self.street_address, "Street address is required").and_then(|_| {
                rules::min_chars(&self.street_address, 10, "Please enter a complete street address")
            }),
        );
        errors.check("state", rules::required(&self.state, "State is required"));
        errors.check("zipCode", rules::zipcode(&self.zip_code));
        errors.check("password", rules::password(&self.password));
        errors
    }

    pub fn to_request(&self) -> Result<CreateOrganizerRequest, FieldErrors> {
        self.validate().into_result()?;
        Ok(CreateOrganizerRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            contact: self.contact.trim().to_string(),
            street_address: self.street_address.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            password: self.password.clone(),
            role: Role::Organizer,
        })
    }
}
