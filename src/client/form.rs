use serde::{Deserialize, Serialize};

use super::ClientError;

/// Raw diet form fields exactly as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietForm {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub fitness_goal: String,
    pub food_preference: String,
    #[serde(default)]
    pub allergies: String,
}

impl DietForm {
    /// Every field but `allergies` must be filled in before anything is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        let required = [
            &self.name,
            &self.age,
            &self.weight,
            &self.height,
            &self.gender,
            &self.fitness_goal,
            &self.food_preference,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(ClientError::Validation("Please fill in all required fields"));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn filled_form() -> DietForm {
    DietForm {
        name: "Alex".into(),
        age: "25".into(),
        weight: "70".into(),
        height: "170".into(),
        gender: "male".into(),
        fitness_goal: "maintain".into(),
        food_preference: "vegetarian".into(),
        allergies: String::new(),
    }
}
