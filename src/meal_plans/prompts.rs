use super::dto::UserProfile;
use crate::llm::ChatMessage;

const MEAL_PLAN_SCHEMA: &str = r#"{
  "breakfast": {
    "name": "Meal name",
    "ingredients": ["ingredient 1", "ingredient 2"],
    "nutrition": {"calories": 400, "protein": 20, "carbs": 45, "fats": 15}
  },
  "lunch": {
    "name": "Meal name",
    "ingredients": ["ingredient 1", "ingredient 2"],
    "nutrition": {"calories": 500, "protein": 30, "carbs": 50, "fats": 18}
  },
  "snacks": {
    "name": "Snack name",
    "ingredients": ["ingredient 1", "ingredient 2"],
    "nutrition": {"calories": 200, "protein": 10, "carbs": 25, "fats": 8}
  },
  "dinner": {
    "name": "Meal name",
    "ingredients": ["ingredient 1", "ingredient 2"],
    "nutrition": {"calories": 500, "protein": 35, "carbs": 45, "fats": 20}
  },
  "totalNutrition": {
    "calories": 1600,
    "protein": 95,
    "carbs": 165,
    "fats": 61
  }
}"#;

pub fn system_prompt(profile: &UserProfile, calorie_target: f64) -> String {
    let allergy_line = profile
        .allergies()
        .map(|a| format!("- Avoid these allergens: {a}"))
        .unwrap_or_default();

    format!(
        "You are a professional nutritionist creating personalized meal plans. \
Create a detailed daily meal plan with realistic portions and accurate nutritional information.

Guidelines:
- Total daily calories should be around {calories} calories
- Food preference: {preference}
{allergy_line}
- Fitness goal: {goal}
- Provide specific meal names, not just generic descriptions
- Include realistic ingredient lists
- Calculate accurate nutritional values

Return the meal plan in this exact JSON structure:
{MEAL_PLAN_SCHEMA}",
        calories = calorie_target.round(),
        preference = profile.food_preference,
        goal = profile.fitness_goal,
    )
}

pub fn user_prompt(p: &UserProfile) -> String {
    format!(
        "Create a personalized meal plan for {}, a {}-year-old {} who weighs {}kg and is {}cm tall. \
Goal: {}. Food preference: {}.",
        p.name.trim(),
        p.age,
        p.gender,
        p.weight,
        p.height,
        p.fitness_goal,
        p.food_preference
    )
}

pub fn messages(profile: &UserProfile, calorie_target: f64) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(profile, calorie_target)),
        ChatMessage::user(user_prompt(profile)),
    ]
}
