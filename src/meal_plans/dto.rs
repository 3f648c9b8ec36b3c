use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        })
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FitnessGoal::LoseWeight => "lose-weight",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::GainMuscle => "gain-muscle",
        })
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FoodPreference::Vegetarian => "vegetarian",
            FoodPreference::NonVegetarian => "non-vegetarian",
            FoodPreference::Vegan => "vegan",
        })
    }
}

/// Request body of `POST /generate-meal-plan`.
///
/// Unknown fields are ignored, so a regeneration request that echoes the
/// previous `mealPlan` and `userName` deserializes the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub age: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub weight: f64, // kg
    #[serde(deserialize_with = "number_or_string")]
    pub height: f64, // cm
    pub gender: Gender,
    pub fitness_goal: FitnessGoal,
    pub food_preference: FoodPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".into());
        }
        for (field, value) in [("age", self.age), ("weight", self.weight), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{field} must be a positive number"));
            }
        }
        Ok(())
    }

    /// Allergies with blank input treated as none.
    pub fn allergies(&self) -> Option<&str> {
        self.allergies
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

// The web form posts every field as a string.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("`{s}` is not a number"))),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Nutrition {
    fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub snacks: Meal,
    pub dinner: Meal,
    pub total_nutrition: Nutrition,
}

impl MealPlan {
    pub fn meals(&self) -> [(&'static str, &Meal); 4] {
        [
            ("breakfast", &self.breakfast),
            ("lunch", &self.lunch),
            ("snacks", &self.snacks),
            ("dinner", &self.dinner),
        ]
    }

    /// Nutrition values must be finite and non-negative. Totals are not
    /// cross-checked against the meals.
    pub fn check_nutrition(&self) -> Result<(), String> {
        for (slot, meal) in self.meals() {
            if !meal.nutrition.is_valid() {
                return Err(format!("{slot} has negative or non-finite nutrition values"));
            }
        }
        if !self.total_nutrition.is_valid() {
            return Err("totalNutrition has negative or non-finite values".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub meal_plan: MealPlan,
}
