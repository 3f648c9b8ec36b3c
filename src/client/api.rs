use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::form::DietForm;
use super::pages::PlanPageState;
use super::{Action, BusyFlag, ClientError, RequestError};
use crate::health_tips::dto::HealthTips;
use crate::meal_plans::dto::{MealPlan, MealPlanResponse};

/// Regeneration resends the profile and echoes the previous page state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegenerateBody<'a> {
    #[serde(flatten)]
    profile: &'a DietForm,
    meal_plan: &'a MealPlan,
    user_name: &'a str,
}

pub struct DietPlannerClient {
    http: reqwest::Client,
    base_url: String,
    generating: BusyFlag,
    regenerating: BusyFlag,
    loading_tips: BusyFlag,
}

impl DietPlannerClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            generating: BusyFlag::default(),
            regenerating: BusyFlag::default(),
            loading_tips: BusyFlag::default(),
        }
    }

    fn flag(&self, action: Action) -> &BusyFlag {
        match action {
            Action::Generate => &self.generating,
            Action::Regenerate => &self.regenerating,
            Action::LoadTips => &self.loading_tips,
        }
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.flag(action).is_busy()
    }

    pub async fn generate_meal_plan(&self, form: &DietForm) -> Result<PlanPageState, ClientError> {
        form.validate()?;
        let res: MealPlanResponse = self
            .run(Action::Generate, "generate-meal-plan", Some(form))
            .await?;
        Ok(PlanPageState {
            meal_plan: res.meal_plan,
            user_name: form.name.clone(),
            profile: form.clone(),
        })
    }

    /// Requests a fresh plan for the same profile. On success the page state
    /// is updated in place.
    pub async fn regenerate(&self, state: &mut PlanPageState) -> Result<(), ClientError> {
        let body = RegenerateBody {
            profile: &state.profile,
            meal_plan: &state.meal_plan,
            user_name: &state.user_name,
        };
        let res: MealPlanResponse = self
            .run(Action::Regenerate, "generate-meal-plan", Some(&body))
            .await?;
        state.meal_plan = res.meal_plan;
        Ok(())
    }

    pub async fn health_tips(&self) -> Result<HealthTips, ClientError> {
        self.run::<(), _>(Action::LoadTips, "generate-health-tips", None)
            .await
    }

    async fn run<B, T>(&self, action: Action, endpoint: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _busy = self
            .flag(action)
            .try_begin()
            .ok_or(ClientError::Busy(action))?;

        self.post(endpoint, body).await.map_err(|source| {
            warn!(?action, error = %source, "request failed");
            ClientError::Failed { action, source }
        })
    }

    async fn post<B, T>(&self, endpoint: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut req = self.http.post(&url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let res = req.send().await?;
        let status = res.status();
        debug!(%url, %status, "response");

        if !status.is_success() {
            let message = res
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_default();
            return Err(RequestError::Status { status, message });
        }
        Ok(res.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::form::filled_form;
    use crate::health_tips::dto::TipCategory;
    use crate::meal_plans::dto::fixtures::meal_plan_json;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn plan_response() -> serde_json::Value {
        json!({ "mealPlan": meal_plan_json() })
    }

    #[tokio::test]
    async fn blank_field_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(plan_response()))
            .expect(0)
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(server.uri());
        let mut form = filled_form();
        form.gender.clear();
        let err = client.generate_meal_plan(&form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn generate_then_regenerate_resends_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-meal-plan"))
            .and(body_partial_json(json!({ "name": "Alex", "age": "25" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(plan_response()))
            .expect(2)
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(format!("{}/", server.uri()));
        let mut state = client.generate_meal_plan(&filled_form()).await.unwrap();
        assert_eq!(state.user_name, "Alex");
        assert_eq!(state.meal_plan.lunch.name, "Lentil Bowl");

        client.regenerate(&mut state).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(second["userName"], "Alex");
        assert_eq!(second["fitnessGoal"], "maintain");
        assert!(second["mealPlan"]["breakfast"].is_object());
    }

    #[tokio::test]
    async fn server_error_becomes_action_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "AI gateway error" })),
            )
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(server.uri());
        let err = client.generate_meal_plan(&filled_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate meal plan. Please try again.");
        match err {
            ClientError::Failed {
                source: RequestError::Status { message, .. },
                ..
            } => assert_eq!(message, "AI gateway error"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!client.is_busy(Action::Generate));
    }

    #[tokio::test]
    async fn undecodable_success_body_is_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(server.uri());
        let err = client.health_tips().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load health tips. Please try again.");
        assert!(matches!(
            err,
            ClientError::Failed {
                action: Action::LoadTips,
                source: RequestError::Http(_),
            }
        ));
    }

    #[tokio::test]
    async fn concurrent_submit_is_rejected_while_busy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-meal-plan"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(plan_response())
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(server.uri());
        let form = filled_form();
        let (first, second) = tokio::join!(
            client.generate_meal_plan(&form),
            client.generate_meal_plan(&form)
        );
        assert!(first.is_ok());
        assert!(matches!(second, Err(ClientError::Busy(Action::Generate))));
        assert!(!client.is_busy(Action::Generate));
    }

    #[tokio::test]
    async fn loads_health_tips() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-health-tips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tips": [{ "category": "Water Intake", "tips": ["Sip often"] }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DietPlannerClient::new(server.uri());
        let tips = client.health_tips().await.unwrap();
        assert_eq!(tips.tips[0].category, TipCategory::WaterIntake);
    }
}
