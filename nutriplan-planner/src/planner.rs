use std::sync::Arc;

use log::{debug, error, warn};
use nutriplan_model::{DietPlan, UserProfile};
use serde_json::Value;

use crate::{
    bmr::compute_bmr, calories::daily_calories, input::parse_profile, macros::macro_split,
    meals::MealCatalog, sampler::MealSampler, validator::validate, PlanError, Result,
};

pub struct Planner<S> {
    catalog: Arc<MealCatalog>,
    sampler: S,
}

impl<S: MealSampler> Planner<S> {
    pub fn new(sampler: S) -> Self {
        Self::with_catalog(MealCatalog::standard(), sampler)
    }

    pub fn with_catalog(catalog: Arc<MealCatalog>, sampler: S) -> Self {
        Self { catalog, sampler }
    }

    /// Runs BMR, calorie target, macro split and meal selection in order.
    pub fn generate_meal_plan(&self, profile: &UserProfile) -> Result<DietPlan> {
        let bmr = compute_bmr(profile.weight, profile.height, profile.age, profile.gender)?;
        let calories = daily_calories(bmr, profile.activity_level, profile.goal);

        self.meals_for_calories(calories, &profile.dietary_preferences, &profile.allergies)
            .inspect_err(|e| error!("Error generating meal plan: {}", e))
    }

    /// Same as [`Planner::generate_meal_plan`], starting from a raw request body.
    pub fn generate_from_json(&self, input: &Value) -> Result<DietPlan> {
        let profile = parse_profile(input).inspect_err(|e| error!("Error generating meal plan: {}", e))?;
        self.generate_meal_plan(&profile)
    }

    /// Validates a request body, reporting every problem at once, then plans.
    pub fn plan_request(&self, input: &Value) -> Result<DietPlan> {
        let errors = validate(input);
        if !errors.is_empty() {
            warn!("Validation errors: {:?}", errors);
            return Err(PlanError::Validation(errors));
        }
        self.generate_from_json(input)
    }

    pub fn meals_for_calories(
        &self,
        calories: f64,
        preferences: &[String],
        allergies: &[String],
    ) -> Result<DietPlan> {
        if !calories.is_finite() || calories < 0.0 {
            return Err(PlanError::computation(format!(
                "Calorie target must be a non-negative number, got {}",
                calories
            ))
            .in_stage("Error getting meal recommendations"));
        }

        let mut plan = DietPlan::new(calories.round() as i64, macro_split(calories));
        plan.meals = self
            .catalog
            .select_meals(&self.sampler, preferences, allergies)?;
        debug!("Generated plan with {} kcal", plan.daily_calories);
        Ok(plan)
    }
}
