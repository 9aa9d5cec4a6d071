//! Shared records produced and consumed by the calculators.
//!
//! These types carry no behavior beyond construction checks and derived
//! values. They serialize into the JSON report.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Exactly four numbers checked by the validator.
///
/// Values are exact integers, so the sum check compares without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSet([i64; 4]);

impl NumberSet {
    pub const LEN: usize = 4;

    pub fn new(values: [i64; 4]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64; 4] {
        &self.0
    }
}

impl From<[i64; 4]> for NumberSet {
    fn from(values: [i64; 4]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[i64]> for NumberSet {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let values: [i64; 4] = values.try_into().map_err(|_| {
            Error::invalid(format!(
                "expected {} numbers, got {}",
                Self::LEN,
                values.len()
            ))
        })?;
        Ok(Self(values))
    }
}

/// Outcome of each predicate over a [`NumberSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub sum_equals_50: bool,
    pub at_least_two_odd: bool,
    /// True when no value exceeds 25.
    pub none_over_25: bool,
    pub all_unique: bool,
}

impl ValidationResult {
    /// True when every predicate holds.
    pub fn is_valid(&self) -> bool {
        self.sum_equals_50 && self.at_least_two_odd && self.none_over_25 && self.all_unique
    }
}

/// Fixed trip parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Trip length in miles.
    pub distance_miles: f64,
    /// Money available for fuel, in dollars.
    pub fuel_budget: f64,
    /// Average fuel price in dollars per gallon.
    pub cost_per_gallon: f64,
}

impl Default for TripPlan {
    fn default() -> Self {
        Self {
            distance_miles: 1500.0,
            fuel_budget: 175.0,
            cost_per_gallon: 3.0,
        }
    }
}

impl TripPlan {
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("distance_miles", self.distance_miles),
            ("fuel_budget", self.fuel_budget),
            ("cost_per_gallon", self.cost_per_gallon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Fuel and time estimates for one speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedEvaluation {
    /// Miles per hour.
    pub speed: u32,
    /// Gallons.
    pub fuel_needed: f64,
    /// Dollars.
    pub fuel_cost: f64,
    /// Hours.
    pub trip_duration: f64,
    pub budget_sufficient: bool,
}
