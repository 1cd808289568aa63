pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

use nutriplan_planner::{MealSampler, Planner};

pub type SharedPlanner = Planner<Box<dyn MealSampler>>;
