//! Single-field rules shared by every form.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Something, an `@`, something, a dot, something.
    pub static ref LOOSE_EMAIL_REGEX: Regex = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
    pub static ref STRICT_EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?\d{7,15}$").unwrap();
    pub static ref CONTACT_REGEX: Regex = Regex::new(r"^\+?[\d\s-]{10,}$").unwrap();
    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

pub const ZIP_MIN: u32 = 10_000;
pub const ZIP_MAX: u32 = 999_999;
pub const PASSWORD_MIN_LEN: usize = 8;

pub type Rule = Result<(), String>;

pub fn required(value: &str, message: &str) -> Rule {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn min_chars(value: &str, min: usize, message: &str) -> Rule {
    if value.trim().chars().count() < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn matches(value: &str, regex: &Regex, message: &str) -> Rule {
    if regex.is_match(value.trim()) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Required and shaped like `name@domain.tld`.
pub fn email(value: &str) -> Rule {
    required(value, "Email is required")?;
    matches(value, &STRICT_EMAIL_REGEX, "Invalid email address")
}

/// Digits only and within [`ZIP_MIN`]..=[`ZIP_MAX`].
pub fn zipcode(value: &str) -> Rule {
    parse_zipcode(value).map(|_| ())
}

pub fn parse_zipcode(value: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Zipcode is required".to_string());
    }
    if !DIGITS_REGEX.is_match(value) {
        return Err("Zipcode must be numeric".to_string());
    }
    match value.parse::<u32>() {
        Ok(zip) if (ZIP_MIN..=ZIP_MAX).contains(&zip) => Ok(zip),
        _ => Err("Zipcode must be 5-6 digits".to_string()),
    }
}

/// At least eight characters with an uppercase letter, a lowercase letter and a digit.
pub fn password(value: &str) -> Rule {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 8 characters".to_string());
    }
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    if upper && lower && digit {
        Ok(())
    } else {
        Err("Password must contain uppercase, lowercase, and a number".to_string())
    }
}

/// Strength meter score from 0 to 4: length, uppercase, digit, symbol.
pub fn password_strength(value: &str) -> u8 {
    [
        value.chars().count() >= PASSWORD_MIN_LEN,
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    ]
    .iter()
    .filter(|met| **met)
    .count() as u8
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("foo", false)]
    #[test_case("foo@bar", false)]
    #[test_case("foo@bar.com", true)]
    #[test_case("  foo@bar.com ", true)]
    #[test_case("fo o@bar.com", false)]
    #[test_case("", false)]
    fn email_shape(input: &str, ok: bool) {
        assert_eq!(email(input).is_ok(), ok);
    }

    #[test_case("54000", Ok(54000))]
    #[test_case("999999", Ok(999999))]
    #[test_case("9999", Err("Zipcode must be 5-6 digits"))]
    #[test_case("1000000", Err("Zipcode must be 5-6 digits"))]
    #[test_case("54a00", Err("Zipcode must be numeric"))]
    #[test_case("-54000", Err("Zipcode must be numeric"))]
    #[test_case("", Err("Zipcode is required"))]
    fn zipcodes(input: &str, expected: Result<u32, &str>) {
        assert_eq!(parse_zipcode(input), expected.map_err(str::to_string));
    }

    #[test_case("Secret12", true)]
    #[test_case("secret12", false)]
    #[test_case("SECRET12", false)]
    #[test_case("SecretAb", false)]
    #[test_case("Sec12", false)]
    fn password_classes(input: &str, ok: bool) {
        assert_eq!(password(input).is_ok(), ok);
    }

    #[test]
    fn strength_counts_each_criterion() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdef1!"), 4);
        assert_eq!(strength_label(4), "Strong");
    }

    #[test]
    fn phone_and_contact_patterns() {
        assert!(PHONE_REGEX.is_match("+923001234567"));
        assert!(!PHONE_REGEX.is_match("12345"));
        assert!(CONTACT_REGEX.is_match("+92 300-1234567"));
        assert!(!CONTACT_REGEX.is_match("300 12"));
    }

    proptest! {
        #[test]
        fn zip_accepts_exactly_the_range(zip in 0u32..2_000_000) {
            let accepted = zipcode(&zip.to_string()).is_ok();
            prop_assert_eq!(accepted, (ZIP_MIN..=ZIP_MAX).contains(&zip));
        }
    }
}
