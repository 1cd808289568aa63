pub mod bmr;
pub mod calories;
pub mod chat;
pub mod error;
pub mod input;
pub mod macros;
pub mod meals;
pub mod planner;
pub mod sampler;
pub mod validator;

pub use error::{PlanError, Result};
pub use planner::Planner;
pub use sampler::{MealSampler, RandomSampler, SeededSampler};
pub use validator::validate;

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_places() {
        let test_data = [
            (1234.5678, 2, 1234.57),
            (66.66666, 1, 66.7),
            (150.04, 1, 150.0),
            (-84.987, 2, -84.99),
            (0.25, 1, 0.3),
        ];

        for (i, (value, places, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(round_to(value, places), expected, "Test case #{}", i);
        }
    }
}
