mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod mail;
mod middleware;
mod models;
mod routes;
mod service;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use dotenv::dotenv;
use routes::create_router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use crate::db::admindb::AdminExt;
use crate::db::db::DBClient;
use crate::service::{booking_service::BookingService, whatsapp::WhatsAppClient};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    pub whatsapp: Arc<WhatsAppClient>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    pub fn new(db_client: DBClient, config: Config) -> Self {
        let db_client_arc = Arc::new(db_client);
        let whatsapp = Arc::new(WhatsAppClient::from_config(&config));

        let booking_service = Arc::new(BookingService::new(
            db_client_arc.clone(),
            whatsapp.clone(),
            config.app_url.clone(),
        ));

        Self {
            env: config,
            db_client: db_client_arc,
            whatsapp,
            booking_service,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(20)
        .min_connections(5)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            println!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let db_client = DBClient::new(pool);

    // Idempotent admin seed so the panel is reachable on a fresh database.
    let password_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)
        .expect("Failed to hash admin password");
    match db_client.seed_admin(&config.admin_phone, &password_hash).await {
        Ok(admin) => tracing::info!("Admin account ready for {}", admin.phone),
        Err(err) => {
            println!("🔥 Failed to seed admin account: {:?}", err);
            std::process::exit(1);
        }
    }

    let allowed_origins = vec![
        config.app_url.parse::<HeaderValue>().unwrap(),
        "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        "http://localhost:8000".parse::<HeaderValue>().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ]);

    let app_state = Arc::new(AppState::new(db_client, config.clone()));

    let app = create_router(app_state.clone()).layer(cors);

    println!("🚀 Server is running on http://localhost:{}", config.port);
    println!(
        "📱 WhatsApp delivery: {}",
        if app_state.whatsapp.is_enabled() {
            "enabled"
        } else {
            "disabled (codes returned in dev responses)"
        }
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
