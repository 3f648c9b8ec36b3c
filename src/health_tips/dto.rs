use serde::{Deserialize, Serialize};

/// Category label of a tip group. Labels other than the three requested
/// ones are kept verbatim in [`TipCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TipCategory {
    WaterIntake,
    Exercise,
    MindfulEating,
    Other(String),
}

impl TipCategory {
    pub fn label(&self) -> &str {
        match self {
            TipCategory::WaterIntake => "Water Intake",
            TipCategory::Exercise => "Exercise",
            TipCategory::MindfulEating => "Mindful Eating",
            TipCategory::Other(label) => label,
        }
    }
}

impl From<String> for TipCategory {
    fn from(label: String) -> Self {
        let label = label.trim();
        match label {
            "Water Intake" => TipCategory::WaterIntake,
            "Exercise" => TipCategory::Exercise,
            "Mindful Eating" => TipCategory::MindfulEating,
            _ => TipCategory::Other(label.to_string()),
        }
    }
}

impl From<TipCategory> for String {
    fn from(c: TipCategory) -> Self {
        match c {
            TipCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipGroup {
    pub category: TipCategory,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTips {
    pub tips: Vec<TipGroup>,
}
