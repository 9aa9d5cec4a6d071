//! Full program report: number validation followed by the trip comparison.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::core::numbers::{validate, validate_numbers};
use crate::core::trip::TripPlanner;
use crate::core::types::{NumberSet, SpeedEvaluation, ValidationResult};

/// Numbers checked by the first half of the report.
pub const REPORT_NUMBERS: [i64; 4] = [10, 15, 20, 5];
/// Numbers passed to the generalized validator in the example line.
pub const EXAMPLE_NUMBERS: [i64; 4] = [10, 15, 20, 5];

/// Everything the CLI prints, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub numbers: NumberSet,
    pub validation: ValidationResult,
    pub valid: bool,
    pub example_numbers: Vec<i64>,
    pub example_valid: bool,
    pub evaluations: Vec<SpeedEvaluation>,
    pub best_speed: u32,
}

/// Run both calculators and collect their results.
pub fn build_report(planner: &TripPlanner) -> Result<Report> {
    let numbers = NumberSet::new(REPORT_NUMBERS);
    let validation = validate(&numbers);
    let example_valid =
        validate_numbers(&EXAMPLE_NUMBERS).context("validate example numbers")?;

    let speeds = planner.candidate_speeds();
    let evaluations = speeds
        .iter()
        .map(|&speed| {
            planner
                .evaluate(speed)
                .with_context(|| format!("evaluate {speed} mph"))
        })
        .collect::<Result<Vec<_>>>()?;
    let best_speed = planner
        .best_speed(&speeds)
        .context("select best speed")?;

    info!(valid = validation.is_valid(), best_speed, "report built");
    Ok(Report {
        numbers,
        validation,
        valid: validation.is_valid(),
        example_numbers: EXAMPLE_NUMBERS.to_vec(),
        example_valid,
        evaluations,
        best_speed,
    })
}

/// Render the human-readable report. Ends with a newline.
pub fn render_text(report: &Report) -> String {
    let validation = &report.validation;
    let mut lines = vec![
        report.valid.to_string(),
        format!(
            "The four numbers are valid according to the provided criteria: {}.",
            report.valid
        ),
        "Validation complete!\nPlease review the results.".to_string(),
        format!(
            "Validation Results:\n\
             - Sum equals 50: {}\n\
             - At least two odd numbers: {}\n\
             - No number larger than 25: {}\n\
             - All numbers unique: {}",
            validation.sum_equals_50,
            validation.at_least_two_odd,
            validation.none_over_25,
            validation.all_unique
        ),
        format!("Example validation result: {}", report.example_valid),
    ];
    lines.extend(report.evaluations.iter().map(render_evaluation));
    lines.push(format!(
        "The most sensible speed for the trip is {} miles per hour.",
        report.best_speed
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_evaluation(evaluation: &SpeedEvaluation) -> String {
    format!(
        "At {} miles per hour:\n  \
         - Fuel needed: {:.2} gallons\n  \
         - Fuel cost: ${:.2}\n  \
         - Trip duration: {:.2} hours\n  \
         - Budget sufficient: {}",
        evaluation.speed,
        evaluation.fuel_needed,
        evaluation.fuel_cost,
        evaluation.trip_duration,
        if evaluation.budget_sufficient {
            "Yes"
        } else {
            "No"
        }
    )
}

/// Render the report as pretty-printed JSON with trailing newline.
pub fn render_json(report: &Report) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report json")?;
    payload.push('\n');
    Ok(payload)
}
