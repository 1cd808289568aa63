use std::ops::RangeInclusive;

use log::{debug, error};
use nutriplan_model::Gender;

use crate::{round_to, PlanError, Result};

pub const AGE_RANGE: RangeInclusive<i64> = 1..=120;
/// Kilograms
pub const WEIGHT_RANGE: RangeInclusive<f64> = 20.0..=500.0;
/// Centimeters
pub const HEIGHT_RANGE: RangeInclusive<f64> = 50.0..=300.0;

/// Harris-Benedict basal metabolic rate in kcal/day, rounded to 2 places.
pub fn compute_bmr(weight: f64, height: f64, age: u32, gender: Gender) -> Result<f64> {
    check_preconditions(weight, height, age)
        .map_err(|e| e.in_stage("Error calculating BMR"))
        .inspect_err(|e| error!("{}", e))?;

    let age = f64::from(age);
    let bmr = match gender {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
    };
    let bmr = round_to(bmr, 2);
    debug!("BMR for {} is {}", gender, bmr);
    Ok(bmr)
}

fn check_preconditions(weight: f64, height: f64, age: u32) -> Result<()> {
    if !WEIGHT_RANGE.contains(&weight) {
        Err(PlanError::computation("Weight must be between 20 and 500 kg"))
    } else if !HEIGHT_RANGE.contains(&height) {
        Err(PlanError::computation("Height must be between 50 and 300 cm"))
    } else if !AGE_RANGE.contains(&i64::from(age)) {
        Err(PlanError::computation("Age must be between 1 and 120 years"))
    } else {
        Ok(())
    }
}
