use crate::api::ApiError;
use std::{fmt, str::FromStr};

pub const OTP_LENGTH: usize = 6;

/// Code entry field state: digits only, never longer than `OTP_LENGTH`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OtpInput {
    digits: String,
}

impl OtpInput {
    /// Replaces the field contents, stripping non-digits and clipping to six.
    pub fn set(&mut self, raw: &str) {
        self.digits = sanitize(raw);
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Submit is enabled only for exactly six digits.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.digits.len() == OTP_LENGTH
    }

    #[must_use]
    pub fn code(&self) -> Option<OtpCode> {
        self.can_submit().then(|| OtpCode(self.digits.clone()))
    }
}

impl fmt::Debug for OtpInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpInput")
            .field("len", &self.digits.len())
            .finish()
    }
}

/// A complete six-digit one-time code.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OtpCode {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.len() == OTP_LENGTH && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ApiError::validation(format!(
                "Enter the {OTP_LENGTH}-digit code sent to your email"
            )))
        }
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_strips_non_digits_and_clips() {
        let mut input = OtpInput::default();
        input.set("12a3-4 5");
        assert_eq!(input.as_str(), "12345");
        assert!(!input.can_submit());

        input.set("1234567890");
        assert_eq!(input.as_str(), "123456");
        assert!(input.can_submit());
    }

    #[test]
    fn submit_disabled_for_any_other_length() {
        let mut input = OtpInput::default();
        for raw in ["", "1", "12", "123", "1234", "12345"] {
            input.set(raw);
            assert!(!input.can_submit(), "length {} must not submit", raw.len());
            assert!(input.code().is_none());
        }
        input.set("654321");
        assert_eq!(input.code().map(|code| code.as_str().to_string()), Some("654321".to_string()));
    }

    #[test]
    fn clear_empties_the_field() {
        let mut input = OtpInput::default();
        input.set("123456");
        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn code_parse_requires_six_digits() {
        assert!("123456".parse::<OtpCode>().is_ok());
        assert!(" 123456 ".parse::<OtpCode>().is_ok());
        assert!("12345".parse::<OtpCode>().is_err());
        assert!("12345a".parse::<OtpCode>().is_err());
        assert!("1234567".parse::<OtpCode>().is_err());
    }

    #[test]
    fn debug_hides_digits() {
        let mut input = OtpInput::default();
        input.set("123456");
        assert!(!format!("{input:?}").contains("123456"));
        assert!(!format!("{:?}", input.code()).contains("123456"));
    }
}
