use tracing::info;

use super::dto::HealthTips;
use super::prompts;
use crate::error::AppResult;
use crate::llm::extract;
use crate::state::AppState;

pub async fn generate_health_tips(st: &AppState) -> AppResult<HealthTips> {
    info!("generating health tips");
    let content = st.llm.complete(&prompts::messages()).await?;
    let tips: HealthTips = extract::extract_typed(&content, "health tips")?;
    info!(categories = tips.tips.len(), "health tips generated");
    Ok(tips)
}
