//! Temperature conversion with absolute-zero checks.

use std::fmt;

use crate::error::{Result, TallyError};
use crate::reportable_display;
use crate::validation::{
    validate_celsius, validate_kelvin, ValidationError, ABSOLUTE_ZERO_CELSIUS,
    ABSOLUTE_ZERO_KELVIN,
};

pub use crate::validation::Scale;

/// Distance from absolute zero that still counts as "at" absolute zero.
const ABSOLUTE_ZERO_TOLERANCE: f64 = 0.01;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin + ABSOLUTE_ZERO_CELSIUS
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    CelsiusToFahrenheit,
    KelvinToCelsius,
    FahrenheitToCelsius,
}

impl Conversion {
    pub fn source(&self) -> Scale {
        match self {
            Self::CelsiusToFahrenheit => Scale::Celsius,
            Self::KelvinToCelsius => Scale::Kelvin,
            Self::FahrenheitToCelsius => Scale::Fahrenheit,
        }
    }

    pub fn target(&self) -> Scale {
        match self {
            Self::CelsiusToFahrenheit => Scale::Fahrenheit,
            Self::KelvinToCelsius | Self::FahrenheitToCelsius => Scale::Celsius,
        }
    }
}

/// A value on a given scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub scale: Scale,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOutcome {
    pub input: Temperature,
    pub output: Temperature,
    pub at_absolute_zero: bool,
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.input, self.output)?;
        if self.at_absolute_zero {
            write!(f, " (absolute zero)")?;
        }
        Ok(())
    }
}

reportable_display!(ConversionOutcome);

/// Parse `raw` and convert it, rejecting values below absolute zero.
pub fn convert(raw: &str, conversion: Conversion) -> Result<ConversionOutcome> {
    let value = parse_value(raw)?;

    let (output, at_absolute_zero) = match conversion {
        Conversion::CelsiusToFahrenheit => {
            let celsius = validate_celsius(value)?;
            (
                celsius_to_fahrenheit(celsius),
                near(celsius, ABSOLUTE_ZERO_CELSIUS),
            )
        }
        Conversion::KelvinToCelsius => {
            let kelvin = validate_kelvin(value)?;
            (kelvin_to_celsius(kelvin), near(kelvin, ABSOLUTE_ZERO_KELVIN))
        }
        Conversion::FahrenheitToCelsius => {
            let celsius = validate_celsius(fahrenheit_to_celsius(value)).map_err(|_| {
                ValidationError::BelowAbsoluteZero {
                    value,
                    scale: Scale::Fahrenheit,
                }
            })?;
            (celsius, near(celsius, ABSOLUTE_ZERO_CELSIUS))
        }
    };

    Ok(ConversionOutcome {
        input: Temperature {
            value,
            scale: conversion.source(),
        },
        output: Temperature {
            value: output,
            scale: conversion.target(),
        },
        at_absolute_zero,
    })
}

fn parse_value(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TallyError::InvalidNumber(trimmed.to_string())),
    }
}

fn near(value: f64, target: f64) -> bool {
    (value - target).abs() < ABSOLUTE_ZERO_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boiling_point() {
        let outcome = convert("100", Conversion::CelsiusToFahrenheit).unwrap();
        assert!((outcome.output.value - 212.0).abs() < 1e-9);
        assert_eq!(outcome.to_string(), "100.00 °C = 212.00 °F");
    }

    #[test]
    fn test_zero_kelvin_is_absolute_zero() {
        let outcome = convert("0", Conversion::KelvinToCelsius).unwrap();
        assert!((outcome.output.value + 273.15).abs() < 1e-9);
        assert!(outcome.at_absolute_zero);
    }

    #[test]
    fn test_below_absolute_zero_celsius() {
        let err = convert("-300", Conversion::CelsiusToFahrenheit).unwrap_err();
        assert_eq!(
            err,
            TallyError::Validation(ValidationError::BelowAbsoluteZero {
                value: -300.0,
                scale: Scale::Celsius,
            })
        );
    }

    #[test]
    fn test_fahrenheit_failure_reports_original_value() {
        let err = convert("-500", Conversion::FahrenheitToCelsius).unwrap_err();
        assert_eq!(
            err,
            TallyError::Validation(ValidationError::BelowAbsoluteZero {
                value: -500.0,
                scale: Scale::Fahrenheit,
            })
        );
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(
            convert(" abc ", Conversion::KelvinToCelsius).unwrap_err(),
            TallyError::InvalidNumber("abc".to_string())
        );
        assert!(matches!(
            convert("inf", Conversion::KelvinToCelsius),
            Err(TallyError::InvalidNumber(_))
        ));
    }
}
