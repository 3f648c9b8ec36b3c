use diet_planner::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "diet_planner=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = match AppState::init() {
        Ok(st) => st,
        Err(e) => {
            tracing::error!(error = %e, "startup configuration invalid");
            return Err(e);
        }
    };

    let app = app::build_app(app_state.clone());
    app::serve(app, &app_state).await
}
