//! Field validation for contact records.
//!
//! Phone numbers must normalize to a French ten-digit number; names must be
//! non-empty and free of ASCII punctuation and digits. Error messages are
//! user-facing and kept in French.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::User;

/// Leading country code, or any bracket, whitespace or asterisk.
static PHONE_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+33|[()\s*]").unwrap());

/// Minimum number of digits in a normalized phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// A record field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Carries the normalized number that was rejected.
    #[error("Numéro de téléphone {0} invalide.")]
    PhoneNumber(String),

    #[error("Le prénom et le nom de famille ne peuvent pas être vides.")]
    EmptyNames,

    /// Carries the full name exactly as built from the record.
    #[error("Nom \"{0}\" invalide")]
    InvalidName(String),
}

/// Strip formatting from a phone number.
///
/// Removes a leading `+33` and every `(`, `)`, whitespace and `*`. A
/// nine-character result not starting with `0` gets a `0` prepended.
pub fn normalize_phone_number(raw: &str) -> String {
    let stripped = PHONE_NOISE_RE.replace_all(raw, "");
    if stripped.chars().count() == MIN_PHONE_DIGITS - 1 && !stripped.starts_with('0') {
        format!("0{stripped}")
    } else {
        stripped.into_owned()
    }
}

/// Check that the record's phone number normalizes to at least ten digits.
pub fn check_phone_number(user: &User) -> Result<(), ValidationError> {
    let normalized = normalize_phone_number(&user.phone_number);
    let all_digits = !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit());
    if normalized.chars().count() < MIN_PHONE_DIGITS || !all_digits {
        return Err(ValidationError::PhoneNumber(normalized));
    }
    Ok(())
}

/// Check that both names are present and contain no punctuation or digits.
pub fn check_names(user: &User) -> Result<(), ValidationError> {
    if user.first_name.is_empty() || user.last_name.is_empty() {
        return Err(ValidationError::EmptyNames);
    }

    let full_name = user.full_name();
    if full_name
        .trim()
        .chars()
        .any(|c| c.is_ascii_punctuation() || c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidName(full_name));
    }
    Ok(())
}

/// Run every check, phone number first.
pub fn check_all(user: &User) -> Result<(), ValidationError> {
    check_phone_number(user)?;
    check_names(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_phone(phone: &str) -> User {
        User::new("Jean", "Smith").with_phone_number(phone)
    }

    #[test]
    fn plain_ten_digit_number_is_valid() {
        assert!(check_phone_number(&with_phone("0123456789")).is_ok());
    }

    #[test]
    fn formatted_numbers_are_valid() {
        for phone in [
            "+33 6 68 50 00 36",
            "+33668500036",
            "(06) 68 50 00 36",
            "06*68*50*00*36",
            "  0668500036  ",
            "+33 (0)6 68 50 00 36",
        ] {
            assert!(check_phone_number(&with_phone(phone)).is_ok(), "{phone} should be valid");
        }
    }

    #[test]
    fn nine_digits_get_leading_zero() {
        assert_eq!(normalize_phone_number("668500036"), "0668500036");
        assert_eq!(normalize_phone_number("+33 6 68 50 00 36"), "0668500036");
        assert!(check_phone_number(&with_phone("668500036")).is_ok());
    }

    #[test]
    fn nine_digits_starting_with_zero_are_left_alone() {
        assert_eq!(normalize_phone_number("012345678"), "012345678");
        assert_eq!(
            check_phone_number(&with_phone("012345678")),
            Err(ValidationError::PhoneNumber("012345678".into()))
        );
    }

    #[test]
    fn country_code_only_stripped_at_start() {
        assert_eq!(normalize_phone_number("06+33123456"), "06+33123456");
    }

    #[test]
    fn non_numeric_number_is_rejected() {
        let err = check_phone_number(&with_phone("abcd")).unwrap_err();
        assert_eq!(err.to_string(), "Numéro de téléphone abcd invalide.");
    }

    #[test]
    fn short_number_is_rejected_with_normalized_text() {
        let err = check_phone_number(&with_phone("01 23 45")).unwrap_err();
        assert_eq!(err.to_string(), "Numéro de téléphone 012345 invalide.");
    }

    #[test]
    fn empty_number_is_rejected() {
        let err = check_phone_number(&with_phone("")).unwrap_err();
        assert_eq!(err.to_string(), "Numéro de téléphone  invalide.");
    }

    #[test]
    fn letters_in_long_number_are_rejected() {
        assert!(check_phone_number(&with_phone("06685000ab")).is_err());
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = check_names(&User::new("", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Le prénom et le nom de famille ne peuvent pas être vides."
        );
        assert_eq!(check_names(&User::new("Jean", "")), Err(ValidationError::EmptyNames));
        assert_eq!(check_names(&User::new("", "Smith")), Err(ValidationError::EmptyNames));
    }

    #[test]
    fn punctuation_in_name_is_rejected() {
        let err = check_names(&User::new("Patrick#@&", "#@&$$")).unwrap_err();
        assert_eq!(err.to_string(), "Nom \"Patrick#@& #@&$$\" invalide");
    }

    #[test]
    fn digit_in_name_is_rejected() {
        let err = check_names(&User::new("Jean2", "Smith")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("Jean2 Smith".into()));
    }

    #[test]
    fn accented_and_spaced_names_are_valid() {
        assert!(check_names(&User::new("Hélène", "De la Tour")).is_ok());
        assert!(check_names(&User::new(" Jean", "Smith ")).is_ok());
    }

    #[test]
    fn check_all_reports_phone_before_names() {
        let user = User::new("", "").with_phone_number("abcd");
        assert_eq!(
            check_all(&user),
            Err(ValidationError::PhoneNumber("abcd".into()))
        );
    }

    #[test]
    fn check_all_passes_valid_record() {
        let user = User::with_contact("Patrick", "Martin", "0668500036", "1 rue du chemin");
        assert!(check_all(&user).is_ok());
    }
}
