use log::debug;
use nutriplan_model::{ActivityLevel, Goal};

/// Daily calorie target, unrounded.
pub fn daily_calories(bmr: f64, activity_level: ActivityLevel, goal: Goal) -> f64 {
    let calories = bmr * activity_level.multiplier() * goal.multiplier();
    debug!(
        "Calorie target for {} activity and {} goal is {}",
        activity_level, goal, calories
    );
    calories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moderate_maintain() {
        assert_eq!(
            daily_calories(1500.0, ActivityLevel::Moderate, Goal::Maintain),
            2325.0
        );
    }

    #[test]
    fn composes_both_multipliers() {
        let test_data = [
            (ActivityLevel::Sedentary, Goal::WeightLoss, 1000.0 * 1.2 * 0.85),
            (ActivityLevel::Light, Goal::Maintain, 1000.0 * 1.375),
            (ActivityLevel::Active, Goal::WeightGain, 1000.0 * 1.725 * 1.15),
            (ActivityLevel::VeryActive, Goal::WeightLoss, 1000.0 * 1.9 * 0.85),
        ];

        for (i, (activity_level, goal, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                daily_calories(1000.0, activity_level, goal),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn lookup_keys_are_case_insensitive() {
        let activity_level: ActivityLevel = "MODERATE".parse().unwrap();
        let goal: Goal = "Weight_Gain".parse().unwrap();
        assert_eq!(
            daily_calories(2000.0, activity_level, goal),
            2000.0 * 1.55 * 1.15
        );
    }
}
