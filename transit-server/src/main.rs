use std::net::SocketAddr;
use std::sync::Arc;

use transit_server::dataset::Dataset;
use transit_server::routing::RouteService;
use transit_server::web::{AppState, create_router};

/// Default dataset path, relative to the working directory.
const DEFAULT_DATASET: &str = "data/sample.json";

/// Default listen port.
const DEFAULT_PORT: u16 = 5002;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transit_server=info,tower_http=info".into()),
        )
        .init();

    let dataset_path =
        std::env::var("TRANSIT_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string());
    let port = std::env::var("TRANSIT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // A dataset that fails validation must never serve traffic.
    let dataset = match Dataset::from_file(&dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Failed to load dataset from {dataset_path}: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} stations, {} lines, {} transfers from {dataset_path}",
        dataset.station_count(),
        dataset.lines().len(),
        dataset.transfers().len()
    );

    let service = RouteService::new(Arc::new(dataset));
    let state = AppState::new(service);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Transit route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/stations  - List stations");
    println!("  POST /api/route     - Compute a route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
