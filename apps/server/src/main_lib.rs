use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use immoflow_ai::{DescriptionGenerator, DescriptionServiceTrait};
use immoflow_core::{
    billing::{BillingService, BillingServiceTrait},
    connections::{ConnectionService, ConnectionServiceTrait},
    leads::{LeadService, LeadServiceTrait},
    listings::{ListingService, ListingServiceTrait},
    publish::{PublishService, PublishServiceTrait},
};
use immoflow_social::{GraphClient, PublisherRegistry};
use immoflow_storage_sqlite::{
    connections::ConnectionRepository, db, leads::LeadRepository, listings::ListingRepository,
    profiles::ProfileRepository,
};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub listing_service: Arc<dyn ListingServiceTrait>,
    pub lead_service: Arc<dyn LeadServiceTrait>,
    pub connection_service: Arc<dyn ConnectionServiceTrait>,
    pub publish_service: Arc<dyn PublishServiceTrait>,
    pub billing_service: Arc<dyn BillingServiceTrait>,
    pub description_service: Arc<dyn DescriptionServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub stripe_webhook_secret: String,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("IMMO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let listing_repository = Arc::new(ListingRepository::new(pool.clone(), writer.clone()));
    let lead_repository = Arc::new(LeadRepository::new(pool.clone(), writer.clone()));
    let connection_repository = Arc::new(ConnectionRepository::new(pool.clone(), writer.clone()));
    let profile_repository = Arc::new(ProfileRepository::new(pool.clone(), writer.clone()));

    let graph = match &config.graph_base_url {
        Some(url) => GraphClient::with_base_url(url.clone()),
        None => GraphClient::new(),
    };
    let registry = Arc::new(PublisherRegistry::with_defaults(graph));

    let listing_service = Arc::new(ListingService::new(listing_repository.clone()));
    let lead_service = Arc::new(LeadService::new(
        lead_repository.clone(),
        listing_repository.clone(),
    ));
    let connection_service = Arc::new(ConnectionService::new(connection_repository.clone()));
    let publish_service = Arc::new(PublishService::new(
        listing_repository,
        connection_repository,
        registry,
    ));
    let billing_service = Arc::new(BillingService::new(
        profile_repository,
        config.plan_catalog.clone(),
    ));
    let description_service = Arc::new(DescriptionGenerator::new(
        config.anthropic_api_key.clone(),
        config.anthropic_model.clone(),
    ));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret)?);

    Ok(Arc::new(AppState {
        listing_service,
        lead_service,
        connection_service,
        publish_service,
        billing_service,
        description_service,
        auth,
        stripe_webhook_secret: config.stripe_webhook_secret.clone(),
        db_path,
    }))
}
