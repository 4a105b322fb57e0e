mod clients;
mod config;
mod handlers;
mod intake;
mod models;
mod routes;
mod state;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;

use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env().expect("Failed to load configuration");
    let state =
        web::Data::new(AppState::from_config(&config).expect("Failed to build HTTP clients"));

    tracing::info!("web server listening on 0.0.0.0:{}", config.port);
    tracing::info!("PDF service: {}", config.pdf_service_url);
    tracing::info!(
        "Telegram relay: {}",
        if state.telegram.is_some() { "configured" } else { "NOT configured" }
    );

    let port = config.port;
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
