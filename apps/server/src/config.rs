use std::{net::SocketAddr, time::Duration};

use immoflow_core::billing::PlanCatalog;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub jwt_secret: String,
    pub stripe_webhook_secret: String,
    pub plan_catalog: PlanCatalog,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub graph_base_url: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("IMMO_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid IMMO_LISTEN_ADDR");
        let db_path = std::env::var("IMMO_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let jwt_secret = std::env::var("IMMO_JWT_SECRET").unwrap_or_default();
        let stripe_webhook_secret =
            std::env::var("IMMO_STRIPE_WEBHOOK_SECRET").unwrap_or_default();
        let plan_catalog = PlanCatalog {
            starter_price_id: std::env::var("IMMO_STRIPE_PRICE_STARTER").unwrap_or_default(),
            pro_price_id: std::env::var("IMMO_STRIPE_PRICE_PRO").unwrap_or_default(),
            agency_price_id: std::env::var("IMMO_STRIPE_PRICE_AGENCY").unwrap_or_default(),
        };
        let anthropic_api_key = std::env::var("IMMO_ANTHROPIC_API_KEY").ok();
        let anthropic_model = std::env::var("IMMO_ANTHROPIC_MODEL").ok();
        let graph_base_url = std::env::var("IMMO_GRAPH_BASE_URL").ok();
        let cors_allow = std::env::var("IMMO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("IMMO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            db_path,
            jwt_secret,
            stripe_webhook_secret,
            plan_catalog,
            anthropic_api_key,
            anthropic_model,
            graph_base_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
