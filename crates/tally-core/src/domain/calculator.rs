//! Four-function calculator.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TallyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse one of `+ - * /`, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(TallyError::UnknownOperator(other.to_string())),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl FromStr for Operator {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn calculate(a: f64, op: Operator, b: f64) -> Result<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(TallyError::DivisionByZero),
        Operator::Divide => Ok(a / b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations() {
        assert_eq!(calculate(6.0, Operator::Add, 2.0).unwrap(), 8.0);
        assert_eq!(calculate(6.0, Operator::Subtract, 2.0).unwrap(), 4.0);
        assert_eq!(calculate(6.0, Operator::Multiply, 2.0).unwrap(), 12.0);
        assert_eq!(calculate(6.0, Operator::Divide, 2.0).unwrap(), 3.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            calculate(1.0, Operator::Divide, 0.0).unwrap_err(),
            TallyError::DivisionByZero
        );
    }

    #[test]
    fn test_parse_operator() {
        assert_eq!(" * ".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!(
            Operator::parse("%").unwrap_err(),
            TallyError::UnknownOperator("%".to_string())
        );
    }
}
