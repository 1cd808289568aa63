use nutriplan_model::MacroSplit;

use crate::round_to;

pub const PROTEIN_RATIO: f64 = 0.3;
pub const CARBS_RATIO: f64 = 0.4;
pub const FAT_RATIO: f64 = 0.3;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Splits a calorie target into grams of each macronutrient, rounded to 1 place.
pub fn macro_split(calories: f64) -> MacroSplit {
    MacroSplit {
        protein: round_to(calories * PROTEIN_RATIO / KCAL_PER_GRAM_PROTEIN, 1),
        carbs: round_to(calories * CARBS_RATIO / KCAL_PER_GRAM_CARBS, 1),
        fat: round_to(calories * FAT_RATIO / KCAL_PER_GRAM_FAT, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_thousand_calories() {
        assert_eq!(
            macro_split(2000.0),
            MacroSplit {
                protein: 150.0,
                carbs: 200.0,
                fat: 66.7,
            }
        );
    }

    #[test]
    fn zero_calories() {
        assert_eq!(macro_split(0.0), MacroSplit::default());
    }
}
