use super::dto::{FitnessGoal, Gender, UserProfile};

/// Moderate activity.
pub const ACTIVITY_MULTIPLIER: f64 = 1.55;

impl FitnessGoal {
    pub fn factor(self) -> f64 {
        match self {
            FitnessGoal::LoseWeight => 0.85,
            FitnessGoal::Maintain => 1.0,
            FitnessGoal::GainMuscle => 1.15,
        }
    }
}

/// Mifflin-St Jeor basal metabolic rate. `other` uses the female constant.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

pub fn calorie_target(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Gender,
    goal: FitnessGoal,
) -> f64 {
    bmr(weight_kg, height_cm, age_years, gender) * ACTIVITY_MULTIPLIER * goal.factor()
}

impl UserProfile {
    pub fn calorie_target(&self) -> f64 {
        calorie_target(
            self.weight,
            self.height,
            self.age,
            self.gender,
            self.fitness_goal,
        )
    }
}
