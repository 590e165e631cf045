use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use argo_dashboard_service::api::{create_router, AppState};
use argo_dashboard_service::catalog::{floats, profiles};
use argo_dashboard_service::config::Config;
use argo_dashboard_service::services::{
    AnalyticsService, ChatService, FloatService, ProfileService,
};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,argo_dashboard_service=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting ARGO dashboard service with config: {:?}", config);

    // Seed the session data set once; it stays immutable for the process
    // lifetime and is never persisted.
    let mut rng = rand::thread_rng();
    let profiles = profiles::seed_profiles(&mut rng);
    info!("Seeded {} synthetic profiles", profiles.len());

    let floats = floats::seed_floats();
    info!("Seeded {} floats", floats.len());

    // Create services
    let app_state = AppState {
        profile_service: ProfileService::new(profiles),
        analytics_service: AnalyticsService::new(),
        chat_service: ChatService::new(Duration::from_millis(config.chat_response_delay_ms)),
        float_service: FloatService::new(floats),
    };

    // Create API router
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
