pub mod plan;
pub mod profile;

pub use plan::{ChatReply, DietPlan, MacroSplit, MealSlot};
pub use profile::{ActivityLevel, Gender, Goal, ParseError, UserProfile};
