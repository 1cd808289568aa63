use nutriplan_model::UserProfile;
use serde_json::{Map, Value};

use crate::{PlanError, Result};

/// Accepts JSON integers, floats (truncated) and numeric strings.
///
/// Integer strings too large for `i64` saturate.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int(s.trim()),
        _ => None,
    }
}

fn parse_int(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse() {
        return Some(n);
    }
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Accepts any JSON number and numeric strings.
pub fn coerce_real(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn coerce_tags(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => None,
    }
}

/// Fields a plan cannot be computed without, in the order they are checked.
pub const PROFILE_FIELDS: [&str; 6] = ["weight", "height", "age", "gender", "activity_level", "goal"];

fn required(object: &Map<String, Value>, field: &str) -> Result<()> {
    if object.contains_key(field) {
        Ok(())
    } else {
        Err(PlanError::computation(format!("Missing required field: {}", field)))
    }
}

fn optional_tags(object: &Map<String, Value>, field: &str, label: &str) -> Result<Vec<String>> {
    match object.get(field) {
        None => Ok(Vec::new()),
        Some(value) => coerce_tags(value)
            .ok_or_else(|| PlanError::computation(format!("{} must be a list of strings", label))),
    }
}

/// Builds a profile from a decoded request body, stopping at the first problem.
///
/// Ranges are not checked here, BMR calculation does that.
pub fn parse_profile(input: &Value) -> Result<UserProfile> {
    let object = input
        .as_object()
        .ok_or_else(|| PlanError::computation("Request body must be a JSON object"))?;

    for field in PROFILE_FIELDS {
        required(object, field)?;
    }

    let bmr_error =
        |message: &str| PlanError::computation(format!("Error calculating BMR: {}", message));

    let weight = coerce_real(&object["weight"]).ok_or_else(|| bmr_error("Weight must be a number"))?;
    let height = coerce_real(&object["height"]).ok_or_else(|| bmr_error("Height must be a number"))?;
    let age = coerce_int(&object["age"]).ok_or_else(|| bmr_error("Age must be a number"))?;
    let age = u32::try_from(age).map_err(|_| bmr_error("Age must be between 1 and 120 years"))?;

    let gender = parse_key(&object["gender"]).map_err(|e| e.in_stage("Error calculating BMR"))?;
    let activity_level = parse_key(&object["activity_level"])?;
    let goal = parse_key(&object["goal"])?;

    Ok(UserProfile {
        age,
        weight,
        height,
        gender,
        activity_level,
        goal,
        dietary_preferences: optional_tags(object, "dietary_preferences", "Dietary preferences")?,
        allergies: optional_tags(object, "allergies", "Allergies")?,
    })
}

/// Parses an enum key; non-string values fail with the key's own message.
fn parse_key<T>(value: &Value) -> Result<T>
where
    T: std::str::FromStr<Err = nutriplan_model::ParseError>,
{
    value
        .as_str()
        .unwrap_or_default()
        .parse()
        .map_err(|e: nutriplan_model::ParseError| PlanError::computation(e.message()))
}
