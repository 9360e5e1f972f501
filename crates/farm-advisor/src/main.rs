mod error;
mod routes;
mod state;

extern crate log;

use std::env;
use std::error::Error;

use clap::Parser;

use crate::routes::create_router;
use crate::state::ServerState;

#[derive(Parser)]
struct ServerOptions {
    /// Directory holding configuration.json.
    #[arg(
        long,
        value_name = "CONFIGURATION_DIR",
        env = "FARM_ADVISOR_CONFIGURATION_DIR"
    )]
    configuration_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let server_options = ServerOptions::parse();

    env_logger::init();

    let state = ServerState::initialize(&server_options.configuration_dir).await?;
    let router = create_router(state);

    // allow server port to be set via PORT env var
    let port = env::var("PORT").unwrap_or("8081".to_string());
    let address = format!("0.0.0.0:{port}");

    log::info!("Starting server on {}", address);

    axum::Server::bind(&address.parse()?)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
