use anyhow::Result;
use common::{HttpProvider, ProviderConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use conference::{
    LoginService, RosterService, display::utc_offset, routes, settings::Settings,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting conference service");

    let settings = Settings::load()?;
    let display_offset = utc_offset(settings.utc_offset_minutes)?;

    // Initialize remote provider client
    let provider_config = ProviderConfig::from_env()?;
    let provider = HttpProvider::new(&provider_config)?;

    let app_state = AppState {
        login_service: LoginService::new(provider.clone()),
        roster_service: RosterService::new(provider, settings.participant_filter),
        display_offset,
    };

    info!(
        "Conference service initialized (participant filter: {:?})",
        settings.participant_filter
    );

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&settings.bind_address).await?;
    info!("Conference service listening on {}", settings.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
