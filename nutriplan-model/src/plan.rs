use std::collections::BTreeMap;

use strum::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// Daily macronutrients in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DietPlan {
    pub daily_calories: i64,
    pub macros: MacroSplit,
    pub meals: BTreeMap<MealSlot, Vec<String>>,
}

impl DietPlan {
    pub fn new(daily_calories: i64, macros: MacroSplit) -> Self {
        Self {
            daily_calories,
            macros,
            meals: BTreeMap::new(),
        }
    }

    pub fn meals_for(&self, slot: MealSlot) -> &[String] {
        self.meals.get(&slot).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatReply {
    pub response: String,
    pub sentiment: String,
}
