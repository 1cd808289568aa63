use nutriplan_model::{ActivityLevel, Gender, Goal};
use serde_json::{Map, Value};

use crate::{
    bmr::{AGE_RANGE, HEIGHT_RANGE, WEIGHT_RANGE},
    input::{coerce_int, coerce_real, coerce_tags},
};

pub const REQUIRED_FIELDS: [&str; 8] = [
    "age",
    "weight",
    "height",
    "gender",
    "activity_level",
    "goal",
    "dietary_preferences",
    "allergies",
];

/// Checks a decoded request body and returns every problem found.
///
/// An empty result means the input can be handed to the planner.
pub fn validate(input: &Value) -> Vec<String> {
    let Some(object) = input.as_object() else {
        return vec!["Request body must be a JSON object".to_owned()];
    };

    let mut errors: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !object.contains_key(**field))
        .map(|field| format!("Missing required field: {}", field))
        .collect();

    if let Some(age) = object.get("age") {
        match coerce_int(age) {
            None => errors.push("Age must be a number".to_owned()),
            Some(age) if !AGE_RANGE.contains(&age) => {
                errors.push("Age must be between 1 and 120".to_owned())
            }
            Some(_) => {}
        }
    }

    if let Some(weight) = object.get("weight") {
        match coerce_real(weight) {
            None => errors.push("Weight must be a number".to_owned()),
            Some(weight) if !WEIGHT_RANGE.contains(&weight) => {
                errors.push("Weight must be between 20 and 500 kg".to_owned())
            }
            Some(_) => {}
        }
    }

    if let Some(height) = object.get("height") {
        match coerce_real(height) {
            None => errors.push("Height must be a number".to_owned()),
            Some(height) if !HEIGHT_RANGE.contains(&height) => {
                errors.push("Height must be between 50 and 300 cm".to_owned())
            }
            Some(_) => {}
        }
    }

    check_key::<Gender>(object, "gender", "Gender must be 'male' or 'female'", &mut errors);
    check_key::<ActivityLevel>(object, "activity_level", "Invalid activity level", &mut errors);
    check_key::<Goal>(object, "goal", "Invalid goal", &mut errors);

    check_tags(object, "dietary_preferences", "Dietary preferences", &mut errors);
    check_tags(object, "allergies", "Allergies", &mut errors);

    errors
}

fn check_key<T: std::str::FromStr>(
    object: &Map<String, Value>,
    field: &str,
    message: &str,
    errors: &mut Vec<String>,
) {
    let Some(value) = object.get(field) else {
        return;
    };
    if value.as_str().and_then(|s| s.parse::<T>().ok()).is_none() {
        errors.push(message.to_owned());
    }
}

fn check_tags(object: &Map<String, Value>, field: &str, label: &str, errors: &mut Vec<String>) {
    if object.get(field).is_some_and(|value| coerce_tags(value).is_none()) {
        errors.push(format!("{} must be a list of strings", label));
    }
}
