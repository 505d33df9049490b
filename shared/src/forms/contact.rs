use crate::forms::rules;
use crate::forms::FieldErrors;

/// The "Let's Connect" form. Sending is simulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", rules::required(&self.name, "Name is required"));
        errors.check("email", rules::email(&self.email));
        errors.check("message", rules::required(&self.message, "Message is required"));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 3);
        let form = ContactForm {
            name: "Hina".into(),
            email: "hina@mail.com".into(),
            message: "When does registration close?".into(),
        };
        assert!(form.validate().is_empty());
    }
}
