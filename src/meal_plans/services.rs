use tracing::{debug, info};

use super::dto::{MealPlan, UserProfile};
use super::prompts;
use crate::error::{AppError, AppResult};
use crate::llm::{extract, FormatError};
use crate::state::AppState;

pub async fn generate_meal_plan(st: &AppState, profile: &UserProfile) -> AppResult<MealPlan> {
    profile.validate().map_err(AppError::InvalidRequest)?;

    let target = profile.calorie_target();
    if !target.is_finite() || target <= 0.0 {
        return Err(AppError::InvalidRequest(
            "profile yields a non-positive calorie target".into(),
        ));
    }
    info!(
        name = %profile.name,
        goal = %profile.fitness_goal,
        preference = %profile.food_preference,
        calorie_target = target.round(),
        "generating meal plan"
    );

    let content = st.llm.complete(&prompts::messages(profile, target)).await?;
    debug!(chars = content.len(), "meal plan content received");

    let plan: MealPlan = extract::extract_typed(&content, "meal plan")?;
    plan.check_nutrition().map_err(|reason| FormatError::Shape {
        expected: "meal plan",
        reason,
    })?;
    Ok(plan)
}
