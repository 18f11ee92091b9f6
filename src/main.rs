use std::sync::Arc;

use tower_http::cors::CorsLayer;

use travel_agent_backend::config::AppConfig;
use travel_agent_backend::routes;
use travel_agent_backend::services::gateway::{LlmGateway, OpenAiGateway, SimulatedGateway};
use travel_agent_backend::services::trip_store::FsTripStore;
use travel_agent_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let trips = FsTripStore::init(&config.store_dir).await?;

    let gateway: Arc<dyn LlmGateway> = if config.llm.use_real_provider {
        Arc::new(OpenAiGateway::new(
            config.llm.api_url.clone(),
            config.llm.api_key.clone(),
            config.llm.model.clone(),
        ))
    } else {
        tracing::warn!("REAL_LLM not set, using simulated gateway");
        Arc::new(SimulatedGateway)
    };

    let state = Arc::new(AppState::new(gateway, Arc::new(trips)));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("travel agent API running at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
