//! Fuel, cost and duration estimates for a fixed trip.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::types::{SpeedEvaluation, TripPlan};
use crate::error::Error;

/// Fuel efficiency in miles per gallon, keyed by speed in miles per hour.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable {
    entries: BTreeMap<u32, f64>,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new([(55, 30.0), (60, 28.0), (75, 23.0)])
    }
}

impl SpeedTable {
    pub fn new(entries: impl IntoIterator<Item = (u32, f64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Miles per gallon at `speed`.
    pub fn efficiency(&self, speed: u32) -> Result<f64, Error> {
        self.entries
            .get(&speed)
            .copied()
            .ok_or(Error::Lookup { speed })
    }

    /// Tabulated speeds in ascending order.
    pub fn speeds(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Err(Error::invalid("speed table must not be empty"));
        }
        for (&speed, &mpg) in &self.entries {
            if speed == 0 {
                return Err(Error::invalid("speed table contains 0 mph"));
            }
            if !mpg.is_finite() || mpg <= 0.0 {
                return Err(Error::invalid(format!(
                    "efficiency at {speed} mph must be a positive number, got {mpg}"
                )));
            }
        }
        Ok(())
    }
}

/// Trip calculations over a [`TripPlan`] and [`SpeedTable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPlanner {
    plan: TripPlan,
    table: SpeedTable,
}

impl TripPlanner {
    pub fn new(plan: TripPlan, table: SpeedTable) -> Result<Self, Error> {
        plan.validate()?;
        table.validate()?;
        Ok(Self { plan, table })
    }

    pub fn plan(&self) -> &TripPlan {
        &self.plan
    }

    /// Speeds to compare, in the order the report lists them.
    pub fn candidate_speeds(&self) -> Vec<u32> {
        self.table.speeds()
    }

    /// Gallons needed to cover the trip at `speed`.
    pub fn fuel_needed(&self, speed: u32) -> Result<f64, Error> {
        let mpg = self.table.efficiency(speed)?;
        Ok(self.plan.distance_miles / mpg)
    }

    /// Dollars spent on `gallons` of fuel.
    pub fn fuel_cost(&self, gallons: f64) -> f64 {
        gallons * self.plan.cost_per_gallon
    }

    /// Hours spent driving the trip at `speed`.
    pub fn trip_duration(&self, speed: u32) -> Result<f64, Error> {
        if speed == 0 {
            return Err(Error::invalid("trip duration requires a speed above 0 mph"));
        }
        Ok(self.plan.distance_miles / f64::from(speed))
    }

    /// True if `cost` fits within the fuel budget.
    pub fn budget_sufficient(&self, cost: f64) -> bool {
        cost <= self.plan.fuel_budget
    }

    pub fn evaluate(&self, speed: u32) -> Result<SpeedEvaluation, Error> {
        let fuel_needed = self.fuel_needed(speed)?;
        let fuel_cost = self.fuel_cost(fuel_needed);
        let trip_duration = self.trip_duration(speed)?;
        let budget_sufficient = self.budget_sufficient(fuel_cost);
        debug!(
            speed,
            fuel_needed, fuel_cost, trip_duration, budget_sufficient, "evaluated speed"
        );
        Ok(SpeedEvaluation {
            speed,
            fuel_needed,
            fuel_cost,
            trip_duration,
            budget_sufficient,
        })
    }

    /// Speed with the lowest fuel cost among `candidates`.
    ///
    /// Ties keep the earliest candidate.
    pub fn best_speed(&self, candidates: &[u32]) -> Result<u32, Error> {
        let (&first, rest) = candidates
            .split_first()
            .ok_or_else(|| Error::invalid("best speed requires at least one candidate"))?;
        let mut best = first;
        let mut best_cost = self.fuel_cost(self.fuel_needed(first)?);
        for &speed in rest {
            let cost = self.fuel_cost(self.fuel_needed(speed)?);
            if cost < best_cost {
                best = speed;
                best_cost = cost;
            }
        }
        debug!(best, best_cost, "selected best speed");
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, tied_speed_table};

    #[test]
    fn efficiency_lookup_is_typed() {
        let table = SpeedTable::default();
        assert_eq!(table.efficiency(60), Ok(28.0));
        assert_eq!(table.efficiency(65), Err(Error::Lookup { speed: 65 }));
        assert_eq!(table.speeds(), vec![55, 60, 75]);
    }

    #[test]
    fn default_table_is_valid() {
        SpeedTable::default().validate().expect("default table");
    }

    #[test]
    fn table_rejects_bad_entries() {
        assert!(SpeedTable::new(Vec::<(u32, f64)>::new()).validate().is_err());
        assert!(SpeedTable::new([(0, 30.0)]).validate().is_err());
        assert!(SpeedTable::new([(55, 0.0)]).validate().is_err());
        let err = TripPlanner::new(TripPlan::default(), SpeedTable::new([(55, -1.0)]))
            .expect_err("negative efficiency");
        assert!(err.to_string().contains("55 mph"));
    }

    #[test]
    fn estimates_at_55_mph() {
        let planner = TripPlanner::default();
        let gallons = planner.fuel_needed(55).expect("fuel");
        assert_close(gallons, 50.0);
        assert_close(planner.fuel_cost(gallons), 150.0);
        assert_close(planner.trip_duration(55).expect("duration"), 27.27);
        assert!(planner.budget_sufficient(150.0));
    }

    #[test]
    fn estimates_at_75_mph_exceed_budget() {
        let planner = TripPlanner::default();
        let evaluation = planner.evaluate(75).expect("evaluate");
        assert_eq!(evaluation.speed, 75);
        assert_close(evaluation.fuel_needed, 65.22);
        assert_close(evaluation.fuel_cost, 195.65);
        assert_close(evaluation.trip_duration, 20.0);
        assert!(!evaluation.budget_sufficient);
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        let planner = TripPlanner::default();
        assert!(planner.budget_sufficient(175.0));
        assert!(!planner.budget_sufficient(175.01));
    }

    #[test]
    fn unknown_speed_is_lookup_error() {
        let planner = TripPlanner::default();
        assert_eq!(planner.fuel_needed(65), Err(Error::Lookup { speed: 65 }));
        assert_eq!(planner.evaluate(65), Err(Error::Lookup { speed: 65 }));
    }

    #[test]
    fn zero_speed_duration_is_invalid() {
        let planner = TripPlanner::default();
        let err = planner.trip_duration(0).expect_err("zero speed");
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn best_speed_picks_lowest_cost() {
        let planner = TripPlanner::default();
        assert_eq!(planner.best_speed(&[55, 60, 75]), Ok(55));
        assert_eq!(planner.best_speed(&[75, 60]), Ok(60));
    }

    #[test]
    fn best_speed_keeps_first_on_tie() {
        let planner = TripPlanner::new(TripPlan::default(), tied_speed_table()).expect("planner");
        assert_eq!(planner.best_speed(&[60, 55, 75]), Ok(60));
        assert_eq!(planner.best_speed(&[55, 60, 75]), Ok(55));
    }

    #[test]
    fn best_speed_rejects_empty_and_unknown() {
        let planner = TripPlanner::default();
        assert!(matches!(
            planner.best_speed(&[]),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(
            planner.best_speed(&[55, 90]),
            Err(Error::Lookup { speed: 90 })
        );
    }
}
