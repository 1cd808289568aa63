use std::{fmt, str::FromStr};

use itertools::Itertools;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(String);

impl ParseError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Factor scaling BMR to total daily energy expenditure.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintain,
    WeightGain,
}

impl Goal {
    pub fn multiplier(self) -> f64 {
        match self {
            Goal::WeightLoss => 0.85,
            Goal::Maintain => 1.0,
            Goal::WeightGain => 1.15,
        }
    }
}

fn find_variant<T>(s: &str) -> Option<T>
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter().find(|variant| variant.as_ref().eq_ignore_ascii_case(s))
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_variant(s).ok_or_else(|| ParseError("Gender must be 'male' or 'female'".to_owned()))
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_variant(s).ok_or_else(|| {
            ParseError(format!(
                "Invalid activity level. Must be one of: {}",
                join_keys::<ActivityLevel>()
            ))
        })
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_variant(s).ok_or_else(|| {
            ParseError(format!(
                "Invalid goal. Must be one of: {}",
                join_keys::<Goal>()
            ))
        })
    }
}

macro_rules! display_as_key {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        })*
    };
}

display_as_key!(Gender, ActivityLevel, Goal);

fn join_keys<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter().map(|variant| variant.as_ref().to_owned()).join(", ")
}

/// Biometric input for a single plan request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dietary_preferences: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allergies: Vec<String>,
}
