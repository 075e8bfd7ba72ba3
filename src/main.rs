//! breedstore binary: serve the HTTP API, or populate the table from CSV.

use breedstore::{
    breed_routes, common_routes_with_ready, ensure_breeds_table, populate_from_csv, store,
    AppState,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Breedstore - breed catalog REST backend
#[derive(Parser, Debug)]
#[command(name = "breedstore")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Listen address
        #[arg(long, default_value = "0.0.0.0:3000")]
        listen: String,
    },
    /// Load breeds from a CSV file and exit
    Populate {
        /// Path to the CSV file (header row is skipped)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("breedstore=info")),
        )
        .init();

    let cli = Cli::parse();
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:breeds.db".into());
    let pool = store::connect(&database_url).await?;
    ensure_breeds_table(&pool).await?;

    match cli.command {
        Command::Serve { listen } => {
            let state = AppState { pool };
            let app = axum::Router::new()
                .merge(common_routes_with_ready(state.clone()))
                .merge(breed_routes(state))
                .layer(TraceLayer::new_for_http());

            let listener = TcpListener::bind(&listen).await?;
            tracing::info!("listening on {}", listener.local_addr()?);
            axum::serve(listener, app).await?;
        }
        Command::Populate { file } => {
            let inserted = populate_from_csv(&pool, &file).await?;
            tracing::info!(inserted, "populate complete");
        }
    }
    Ok(())
}
