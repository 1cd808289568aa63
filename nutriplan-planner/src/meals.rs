use std::{
    collections::BTreeMap,
    sync::{Arc, OnceLock},
};

use log::debug;
use nutriplan_model::MealSlot;
use strum::IntoEnumIterator;

use crate::{sampler::MealSampler, PlanError, Result};

pub const MEALS_PER_SLOT: usize = 3;

const BREAKFAST: [&str; 6] = [
    "Oatmeal with banana and honey",
    "Greek yogurt with berries and granola",
    "Whole grain toast with avocado and eggs",
    "Protein smoothie with spinach and fruits",
    "Scrambled eggs with whole grain toast",
    "Overnight oats with almond milk and chia seeds",
];

const LUNCH: [&str; 6] = [
    "Grilled chicken salad with olive oil dressing",
    "Quinoa bowl with roasted vegetables",
    "Turkey and avocado sandwich on whole grain bread",
    "Lentil soup with whole grain crackers",
    "Mixed green salad with tuna",
    "Black bean and sweet potato bowl",
];

const DINNER: [&str; 6] = [
    "Baked salmon with roasted vegetables",
    "Lean beef stir-fry with brown rice",
    "Chickpea curry with brown rice",
    "Grilled chicken breast with sweet potato",
    "Tofu and vegetable stir-fry",
    "Baked cod with quinoa and vegetables",
];

/// Read-only list of example meals per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCatalog {
    meals: BTreeMap<MealSlot, Vec<String>>,
}

impl MealCatalog {
    pub fn new(meals: BTreeMap<MealSlot, Vec<String>>) -> Self {
        Self { meals }
    }

    /// The built-in catalog, shared by every planner in the process.
    pub fn standard() -> Arc<MealCatalog> {
        static STANDARD: OnceLock<Arc<MealCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| {
                Arc::new(MealCatalog::new(
                    [
                        (MealSlot::Breakfast, &BREAKFAST),
                        (MealSlot::Lunch, &LUNCH),
                        (MealSlot::Dinner, &DINNER),
                    ]
                    .into_iter()
                    .map(|(slot, meals)| (slot, meals.iter().map(|&m| m.to_owned()).collect()))
                    .collect(),
                ))
            })
            .clone()
    }

    pub fn meals(&self, slot: MealSlot) -> Result<&[String]> {
        self.meals
            .get(&slot)
            .map(Vec::as_slice)
            .ok_or_else(|| PlanError::Unexpected(format!("no {} meals in catalog", slot.as_ref())))
    }

    /// Picks up to [`MEALS_PER_SLOT`] meals for every slot.
    pub fn select_meals(
        &self,
        sampler: &dyn MealSampler,
        preferences: &[String],
        allergies: &[String],
    ) -> Result<BTreeMap<MealSlot, Vec<String>>> {
        MealSlot::iter()
            .map(|slot| {
                let candidates = filter_meals(self.meals(slot)?, preferences, allergies);
                debug!("{} candidates for {}", candidates.len(), slot.as_ref());
                Ok((slot, sampler.sample(&candidates, MEALS_PER_SLOT)))
            })
            .collect()
    }
}

fn contains_ignore_case(meal: &str, tag: &str) -> bool {
    meal.to_lowercase().contains(&tag.to_lowercase())
}

/// Drops meals containing any allergy tag, then keeps meals matching a
/// preference tag. When no meal matches a preference the allergy-safe set is
/// kept as is; an allergy alone may still leave nothing.
///
/// Empty allergy tags are skipped. An empty preference tag matches every meal.
pub fn filter_meals(meals: &[String], preferences: &[String], allergies: &[String]) -> Vec<String> {
    let allergies: Vec<&String> = allergies.iter().filter(|a| !a.is_empty()).collect();

    let safe: Vec<String> = meals
        .iter()
        .filter(|meal| !allergies.iter().any(|a| contains_ignore_case(meal, a)))
        .cloned()
        .collect();

    if preferences.is_empty() {
        return safe;
    }

    let preferred: Vec<String> = safe
        .iter()
        .filter(|meal| preferences.iter().any(|p| contains_ignore_case(meal, p)))
        .cloned()
        .collect();

    if preferred.is_empty() {
        debug!("No meal matches preferences {:?}, ignoring them", preferences);
        safe
    } else {
        preferred
    }
}
