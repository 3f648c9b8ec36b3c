use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{MealPlanResponse, UserProfile};
use super::services::generate_meal_plan;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/generate-meal-plan", post(create_meal_plan))
}

/// POST /generate-meal-plan
/// Also serves "regenerate": the client resends the same profile.
#[instrument(skip(state, payload))]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> AppResult<Json<MealPlanResponse>> {
    let Json(profile) = payload.map_err(|e| {
        warn!(error = %e, "unreadable meal plan request");
        AppError::InvalidRequest(e.body_text())
    })?;

    let meal_plan = generate_meal_plan(&state, &profile).await?;
    Ok(Json(MealPlanResponse { meal_plan }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_plans::dto::fixtures::{meal_plan_json, profile};
    use crate::state::FakeChatClient;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/generate-meal-plan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_wrapped_meal_plan() {
        let fake = FakeChatClient::replying(meal_plan_json().to_string());
        let app = routes().with_state(AppState::with_client(fake));

        let body = serde_json::to_string(&profile()).unwrap();
        let (status, json) = post_json(app, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["mealPlan"]["dinner"]["name"], "Tofu Stir Fry");
        assert_eq!(json["mealPlan"]["totalNutrition"]["calories"], 1600.0);
    }

    #[tokio::test]
    async fn plan_is_reserialized_from_typed_fields() {
        let mut reply = meal_plan_json();
        reply["notes"] = json!("drink plenty of water");
        reply["breakfast"]["prepTime"] = json!("10 min");
        let fake = FakeChatClient::replying(reply.to_string());
        let app = routes().with_state(AppState::with_client(fake));

        let body = serde_json::to_string(&profile()).unwrap();
        let (status, json) = post_json(app, body).await;
        assert_eq!(status, StatusCode::OK);

        let plan = &json["mealPlan"];
        assert!(plan.get("notes").is_none());
        assert!(plan["breakfast"].get("prepTime").is_none());
        assert!(plan["totalNutrition"]["calories"].is_f64());
        assert_eq!(plan["totalNutrition"]["calories"], 1600.0);
    }

    #[tokio::test]
    async fn regenerate_body_with_previous_plan_is_accepted() {
        let fake = FakeChatClient::replying(meal_plan_json().to_string());
        let app = routes().with_state(AppState::with_client(fake.clone()));

        let mut body = serde_json::to_value(profile()).unwrap();
        body["mealPlan"] = meal_plan_json();
        body["userName"] = json!("Alex");
        let (status, _) = post_json(app, body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let system = &fake.calls()[0][0].content;
        assert!(!system.contains("Overnight Oats"));
    }

    #[tokio::test]
    async fn malformed_body_is_400_json_error() {
        let fake = FakeChatClient::replying("{}");
        let app = routes().with_state(AppState::with_client(fake.clone()));

        let (status, json) = post_json(app, r#"{"name":"x"}"#.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn unparseable_model_output_is_500() {
        let fake = FakeChatClient::replying("I'm sorry, I can't do that.");
        let app = routes().with_state(AppState::with_client(fake));

        let body = serde_json::to_string(&profile()).unwrap();
        let (status, json) = post_json(app, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Invalid AI response format" }));
    }
}
