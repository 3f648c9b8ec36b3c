pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod health_tips;
pub mod llm;
pub mod meal_plans;
pub mod state;
