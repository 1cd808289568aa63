use itertools::Itertools;
use nutriplan_model::{DietPlan, MealSlot};
use serde_json::Value;

use crate::{Client, Result};

fn title(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "Breakfast",
        MealSlot::Lunch => "Lunch",
        MealSlot::Dinner => "Dinner",
    }
}

/// Human readable summary of a plan, one meal per line.
pub fn format_plan(plan: &DietPlan) -> String {
    let mut lines = vec![
        format!("Daily calories: {} kcal", plan.daily_calories),
        format!(
            "Protein: {:.1} g, carbs: {:.1} g, fat: {:.1} g",
            plan.macros.protein, plan.macros.carbs, plan.macros.fat
        ),
    ];
    for (slot, meals) in &plan.meals {
        lines.push(format!("{}:", title(*slot)));
        if meals.is_empty() {
            lines.push("  (no suitable meals)".to_owned());
        }
        lines.extend(meals.iter().map(|meal| format!("  - {}", meal)));
    }
    format!("{}\n", lines.iter().join("\n"))
}

pub async fn request_plan(client: &dyn Client, profile: &Value) -> Result<String> {
    let plan = client.post_diet_plan(profile).await?;
    Ok(format_plan(&plan))
}
