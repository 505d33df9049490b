use crate::dto::auth::CreateUserRequest;
use crate::forms::rules::{self, STRICT_EMAIL_REGEX};
use crate::forms::FieldErrors;
use crate::models::session::Role;

/// The two screens of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    #[default]
    Account,
    Address,
}

impl SignupStep {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            SignupStep::Account => &["name", "email", "password", "confirmPassword"],
            SignupStep::Address => &["streetAddress", "state", "zipcode", "acceptedTerms"],
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            SignupStep::Account => 1,
            SignupStep::Address => 2,
        }
    }
}

/// Roles a visitor may pick for themselves.
pub const SIGNUP_ROLES: &[Role] = &[Role::User, Role::Company];

#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub street_address: String,
    pub state: String,
    pub zipcode: String,
    pub accepted_terms: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::User,
            street_address: String::new(),
            state: String::new(),
            zipcode: String::new(),
            accepted_terms: false,
        }
    }
}

impl SignupForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "password" => self.password = value,
            "confirmPassword" => self.confirm_password = value,
            "role" => {
                let role = Role::from(value.as_str());
                self.role = if SIGNUP_ROLES.contains(&role) { role } else { Role::User };
            }
            "streetAddress" => self.street_address = value,
            "state" => self.state = value,
            "zipcode" => self.zipcode = value,
            _ => {}
        }
    }

    /// Error for one field given the current form, if any.
    pub fn validate_field(&self, field: &str) -> Option<String> {
        let result = match field {
            "name" => rules::required(&self.name, "Name is required")
                .and_then(|_| rules::min_chars(&self.name, 2, "Name must be at least 2 characters")),
            "email" => rules::required(&self.email, "Email is required")
                .and_then(|_| rules::matches(&self.email, &STRICT_EMAIL_REGEX, "Invalid email format")),
            "password" => rules::password(&self.password),
            "confirmPassword" => {
                if self.confirm_password.is_empty() {
                    Err("Please confirm your password".to_string())
                } else if self.confirm_password != self.password {
                    Err("Passwords do not match".to_string())
                } else {
                    Ok(())
                }
            }
            "streetAddress" => rules::required(&self.street_address, "Street address is required"),
            "state" => rules::required(&self.state, "State is required"),
            "zipcode" => rules::zipcode(&self.zipcode),
            "acceptedTerms" => {
                if self.accepted_terms {
                    Ok(())
                } else {
                    Err("You must accept the Terms".to_string())
                }
            }
            _ => Ok(()),
        };
        result.err()
    }

    pub fn validate_step(&self, step: SignupStep) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in step.fields() {
            if let Some(message) = self.validate_field(field) {
                errors.insert(*field, message);
            }
        }
        errors
    }

    pub fn can_continue(&self) -> bool {
        self.validate_step(SignupStep::Account).is_empty()
    }

    pub fn password_strength(&self) -> u8 {
        rules::password_strength(&self.password)
    }

    /// Both steps must pass; the payload is trimmed with a lowercased email and a numeric zipcode.
    pub fn to_request(&self) -> Result<CreateUserRequest, FieldErrors> {
        let mut errors = self.validate_step(SignupStep::Account);
        errors.extend(self.validate_step(SignupStep::Address));
        errors.clone().into_result()?;
        let zipcode = rules::parse_zipcode(&self.zipcode).map_err(|message| {
            let mut errors = FieldErrors::new();
            errors.insert("zipcode", message);
            errors
        })?;
        Ok(CreateUserRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            role: self.role.clone(),
            street_address: self.street_address.trim().to_string(),
            state: self.state.trim().to_string(),
            zipcode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn step_one() -> SignupForm {
        let mut form = SignupForm::default();
        form.set_field("name", "Bilal".into());
        form.set_field("email", "Bilal@Mail.com ".into());
        form.set_field("password", "Secret123".into());
        form.set_field("confirmPassword", "Secret123".into());
        form
    }

    #[test]
    fn step_one_gates_progress() {
        let mut form = step_one();
        assert!(form.can_continue());
        form.set_field("confirmPassword", "Secret124".into());
        assert_eq!(form.validate_field("confirmPassword").as_deref(), Some("Passwords do not match"));
        assert!(!form.can_continue());
    }

    #[rstest]
    #[case("name", "B", "Name must be at least 2 characters")]
    #[case("email", "foo", "Invalid email format")]
    #[case("email", "bilal@home@mail.com", "Invalid email format")]
    #[case("password", "secret123", "Password must contain uppercase, lowercase, and a number")]
    #[case("password", "Sec1", "Password must be at least 8 characters")]
    fn step_one_messages(#[case] field: &str, #[case] value: &str, #[case] message: &str) {
        let mut form = step_one();
        form.set_field(field, value.into());
        assert_eq!(form.validate_field(field).as_deref(), Some(message));
    }

    #[test]
    fn step_two_requires_terms_and_valid_zip() {
        let mut form = step_one();
        form.set_field("streetAddress", "House 4, Street 9".into());
        form.set_field("state", "Sindh".into());
        form.set_field("zipcode", "7460".into());
        let errors = form.validate_step(SignupStep::Address);
        assert_eq!(errors.get("zipcode"), Some("Zipcode must be 5-6 digits"));
        assert_eq!(errors.get("acceptedTerms"), Some("You must accept the Terms"));
    }

    #[test]
    fn request_is_normalised() {
        let mut form = step_one();
        form.set_field("role", "company".into());
        form.set_field("streetAddress", " House 4 ".into());
        form.set_field("state", "Sindh".into());
        form.set_field("zipcode", "74600".into());
        form.accepted_terms = true;
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "bilal@mail.com");
        assert_eq!(request.zipcode, 74600);
        assert_eq!(request.street_address, "House 4");
        assert_eq!(request.role, Role::Company);
    }

    #[test]
    fn admin_role_cannot_be_self_assigned() {
        let mut form = SignupForm::default();
        form.set_field("role", "admin".into());
        assert_eq!(form.role, Role::User);
    }
}
