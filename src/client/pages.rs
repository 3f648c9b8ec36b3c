use serde::{Deserialize, Serialize};

use super::form::DietForm;
use crate::health_tips::dto::TipCategory;
use crate::meal_plans::dto::MealPlan;

/// State handed from the form to the meal plan page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanPageState {
    pub meal_plan: MealPlan,
    pub user_name: String,
    pub profile: DietForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanPage {
    Ready(PlanPageState),
    /// Opened without navigation state; send the user back to the form.
    Missing,
}

impl PlanPage {
    pub const MISSING_TITLE: &'static str = "No Meal Plan Found";
    pub const MISSING_MESSAGE: &'static str = "Please fill out the form first";

    pub fn from_state(state: Option<PlanPageState>) -> Self {
        match state {
            Some(st) if !st.user_name.trim().is_empty() => PlanPage::Ready(st),
            _ => PlanPage::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Droplets,
    Dumbbell,
    Brain,
    Fallback,
}

impl TipCategory {
    pub fn icon(&self) -> CategoryIcon {
        match self {
            TipCategory::WaterIntake => CategoryIcon::Droplets,
            TipCategory::Exercise => CategoryIcon::Dumbbell,
            TipCategory::MindfulEating => CategoryIcon::Brain,
            TipCategory::Other(_) => CategoryIcon::Fallback,
        }
    }
}
