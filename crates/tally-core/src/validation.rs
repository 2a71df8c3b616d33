//! Single-field validators.
//!
//! Each validator takes one raw value, checks it against one constraint and
//! returns either the accepted value or a [`ValidationError`] describing why
//! it was rejected. Validators are pure; composing several of them with `?`
//! stops at the first failure and hands that failure back unchanged.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum number of characters in a person's name.
pub const MIN_NAME_LEN: usize = 3;
/// Youngest accepted age for registration.
pub const MIN_AGE: i64 = 18;
/// Oldest accepted age for registration.
pub const MAX_AGE: i64 = 120;
/// Absolute zero on the Celsius scale.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
/// Absolute zero on the Kelvin scale.
pub const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("valid phone regex"));

/// Temperature scale, used by validators and conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Unit symbol shown after a value.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Errors that can occur while validating a single field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name shorter than [`MIN_NAME_LEN`] characters.
    #[error("The name must have at least {min} characters (got {actual})")]
    NameTooShort { min: usize, actual: usize },

    /// Phone is not exactly nine decimal digits.
    #[error("The phone must have exactly 9 digits: '{0}'")]
    InvalidPhone(String),

    /// Email lacks `@` or `.`.
    #[error("The email is not valid: '{0}'")]
    InvalidEmail(String),

    /// Integer outside an inclusive range.
    #[error("The {field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Temperature below absolute zero on its own scale.
    #[error("{value} {scale} is physically impossible; the lowest possible temperature is absolute zero")]
    BelowAbsoluteZero { value: f64, scale: Scale },

    /// Required text was empty or whitespace.
    #[error("The {0} must not be blank")]
    Blank(&'static str),

    /// Measurement that must be a positive, finite number.
    #[error("The {field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
}

/// Validate a name: at least [`MIN_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let actual = name.chars().count();
    if actual < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort {
            min: MIN_NAME_LEN,
            actual,
        });
    }
    Ok(name)
}

/// Validate a phone: exactly nine ASCII digits, nothing else.
pub fn validate_phone(phone: &str) -> Result<&str, ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(phone)
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Validate an email: must contain both `@` and `.`.
pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    if email.contains('@') && email.contains('.') {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validate an age in `[MIN_AGE, MAX_AGE]`.
pub fn validate_age(age: i64) -> Result<i64, ValidationError> {
    validate_in_range("age", age, MIN_AGE, MAX_AGE)
}

/// Validate an integer against an inclusive range.
pub fn validate_in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Validate a Celsius temperature: not below absolute zero.
pub fn validate_celsius(celsius: f64) -> Result<f64, ValidationError> {
    if celsius < ABSOLUTE_ZERO_CELSIUS {
        return Err(ValidationError::BelowAbsoluteZero {
            value: celsius,
            scale: Scale::Celsius,
        });
    }
    Ok(celsius)
}

/// Validate a Kelvin temperature: not negative.
pub fn validate_kelvin(kelvin: f64) -> Result<f64, ValidationError> {
    if kelvin < ABSOLUTE_ZERO_KELVIN {
        return Err(ValidationError::BelowAbsoluteZero {
            value: kelvin,
            scale: Scale::Kelvin,
        });
    }
    Ok(kelvin)
}

/// Validate that text is not blank.
pub fn validate_not_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(value)
}

/// Validate a measurement: finite and strictly positive.
pub fn validate_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}
