//! GearGuard - maintenance dashboard summary
//!
//! Loads the session store from the configured API and logs the kanban,
//! overdue, and upcoming preventive maintenance overview.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearguard::{
    api::Backend,
    config::{AppConfig, LoggingConfig},
    store::DEFAULT_ACTIVITY_LIMIT,
    views, ApiClient, MaintenanceStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting GearGuard client v{}", env!("CARGO_PKG_VERSION"));

    let client = ApiClient::new(&config.api)?;
    let health = client.health().await?;
    if !health.is_healthy() {
        anyhow::bail!("Backend at {} reports status '{}'", client.base_url(), health.status);
    }
    tracing::info!("Connected to {}", client.base_url());

    let mut store = MaintenanceStore::new(client);
    store.initialize().await?;

    let today = chrono::Local::now().date_naive();

    let board = views::kanban_board(store.requests());
    for column in &board.columns {
        tracing::info!(stage = %column.stage, requests = column.requests.len(), "Kanban column");
    }

    for request in views::overdue_requests(store.requests(), today) {
        tracing::warn!(
            request_id = request.id,
            equipment = views::equipment_name(store.equipment(), request.equipment_id),
            scheduled = ?request.scheduled_date,
            "Overdue request: {}",
            request.subject
        );
    }

    for request in views::upcoming_preventive(store.requests(), today, views::UPCOMING_LIMIT) {
        tracing::info!(
            request_id = request.id,
            equipment = views::equipment_name(store.equipment(), request.equipment_id),
            scheduled = ?request.scheduled_date,
            "Upcoming preventive maintenance: {}",
            request.subject
        );
    }

    let dashboard = store.dashboard(DEFAULT_ACTIVITY_LIMIT).await?;
    tracing::info!(
        total_equipment = dashboard.stats.total_equipment,
        active_requests = dashboard.stats.active_requests,
        overdue_requests = dashboard.stats.overdue_requests,
        critical_requests = dashboard.stats.critical_requests,
        total_teams = dashboard.stats.total_teams,
        "Dashboard"
    );

    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gearguard={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
