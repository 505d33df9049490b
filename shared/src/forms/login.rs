use crate::dto::auth::LoginUserRequest;
use crate::forms::rules::STRICT_EMAIL_REGEX;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// The request to send, or the single banner message explaining why not.
    pub fn to_request(&self) -> Result<LoginUserRequest, String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FILL_ALL_FIELDS.to_string());
        }
        if !STRICT_EMAIL_REGEX.is_match(email) {
            return Err(INVALID_EMAIL.to_string());
        }
        Ok(LoginUserRequest {
            email: email.to_lowercase(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", "pw", FILL_ALL_FIELDS)]
    #[test_case("a@b.co", "", FILL_ALL_FIELDS)]
    #[test_case("not-an-email", "pw", INVALID_EMAIL)]
    fn rejected(email: &str, password: &str, message: &str) {
        let form = LoginForm { email: email.into(), password: password.into() };
        assert_eq!(form.to_request().unwrap_err(), message);
    }

    #[test]
    fn email_is_normalised() {
        let form = LoginForm { email: "  Admin@Arena.PK ".into(), password: "Secret123".into() };
        assert_eq!(form.to_request().unwrap().email, "admin@arena.pk");
    }
}
