//! Body-mass index calculation and measurement history.

use std::fmt;

use tracing::debug;

use crate::error::{Result, TallyError};
use crate::reportable_display;
use crate::validation::validate_positive;

/// Weight and BMI changes smaller than this count as stable.
const STABLE_EPSILON: f64 = 0.05;

pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// One measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiRecord {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

impl fmt::Display for BmiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} kg, {:.2} m -> BMI {:.2} ({})",
            self.weight_kg, self.height_m, self.bmi, self.category
        )
    }
}

reportable_display!(BmiRecord);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stable,
}

impl Direction {
    fn of(delta: f64) -> Self {
        if delta.abs() < STABLE_EPSILON {
            Self::Stable
        } else if delta > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// Change between the last two measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub weight_delta: f64,
    pub bmi_delta: f64,
    pub direction: Direction,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.weight_delta.abs();
        match self.direction {
            Direction::Up => write!(f, "You gained {:.1} kg", amount)?,
            Direction::Down => write!(f, "You lost {:.1} kg", amount)?,
            Direction::Stable => write!(f, "Your weight is stable (\u{00B1}{:.1} kg)", amount)?,
        }
        write!(f, " (BMI change {:+.2})", self.bmi_delta)
    }
}

reportable_display!(Trend);

#[derive(Debug, Clone, Default)]
pub struct BmiHistory {
    records: Vec<BmiRecord>,
}

impl BmiHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a measurement.
    pub fn record(&mut self, weight_kg: f64, height_m: f64) -> Result<&BmiRecord> {
        let weight_kg = validate_positive("weight", weight_kg)?;
        let height_m = validate_positive("height", height_m)?;
        let bmi = compute_bmi(weight_kg, height_m);
        self.records.push(BmiRecord {
            weight_kg,
            height_m,
            bmi,
            category: BmiCategory::classify(bmi),
        });
        debug!(bmi, count = self.records.len(), "bmi recorded");
        Ok(&self.records[self.records.len() - 1])
    }

    /// Compare the latest measurement with the one before it.
    pub fn trend(&self) -> Result<Trend> {
        match self.records.as_slice() {
            [.., previous, last] => {
                let weight_delta = last.weight_kg - previous.weight_kg;
                Ok(Trend {
                    weight_delta,
                    bmi_delta: last.bmi - previous.bmi,
                    direction: Direction::of(weight_delta),
                })
            }
            _ => Err(TallyError::InsufficientHistory {
                needed: 2,
                have: self.records.len(),
            }),
        }
    }

    pub fn records(&self) -> &[BmiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_record_computes_bmi() {
        let mut history = BmiHistory::new();
        let record = history.record(70.0, 1.75).unwrap();
        assert!((record.bmi - 22.857).abs() < 0.001);
        assert_eq!(record.category, BmiCategory::Normal);
    }

    #[test]
    fn test_record_rejects_non_positive() {
        let mut history = BmiHistory::new();
        assert!(history.record(0.0, 1.75).unwrap_err().is_validation());
        assert!(history.record(70.0, f64::NAN).unwrap_err().is_validation());
        assert!(history.is_empty());
    }

    #[test]
    fn test_trend_needs_two_records() {
        let mut history = BmiHistory::new();
        history.record(80.0, 1.80).unwrap();
        assert_eq!(
            history.trend().unwrap_err(),
            TallyError::InsufficientHistory { needed: 2, have: 1 }
        );
    }

    #[test]
    fn test_trend_compares_last_two() {
        let mut history = BmiHistory::new();
        history.record(90.0, 1.80).unwrap();
        history.record(85.0, 1.80).unwrap();
        history.record(82.0, 1.80).unwrap();
        let trend = history.trend().unwrap();
        assert!((trend.weight_delta + 3.0).abs() < 1e-9);
        assert_eq!(trend.direction, Direction::Down);
        assert!(trend.to_string().starts_with("You lost 3.0 kg"));
    }

    #[test]
    fn test_stable_trend_wording() {
        let mut history = BmiHistory::new();
        history.record(70.0, 1.75).unwrap();
        history.record(70.02, 1.75).unwrap();
        let trend = history.trend().unwrap();
        assert_eq!(trend.direction, Direction::Stable);
        assert_eq!(
            trend.to_string(),
            "Your weight is stable (\u{00B1}0.0 kg) (BMI change +0.01)"
        );
    }
}
