use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use tembea_api::{RestApi, RestConfig};
use tembea_core::{Recommender, RecommenderConfig, DEFAULT_NEIGHBORS};

/// Hotel and restaurant recommendations over a static dataset
#[derive(Parser, Debug)]
#[command(name = "tembea")]
#[command(about = "Recommend hotels and restaurants by features or by town", long_about = None)]
struct Args {
    /// Path to the CSV dataset
    #[arg(short, long, default_value = "final.csv")]
    dataset: PathBuf,

    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Neighbors fitted per similarity query
    #[arg(long, default_value_t = DEFAULT_NEIGHBORS)]
    neighbors: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Tembea v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    // Index before accepting requests; a bad dataset stops startup here
    let config = RecommenderConfig {
        n_neighbors: args.neighbors,
    };
    let recommender = Recommender::from_csv(&args.dataset, config).map_err(|e| {
        error!("Failed to build recommender from {:?}: {}", args.dataset, e);
        e
    })?;
    let recommender = Arc::new(recommender);
    info!("Recommender ready: {} items", recommender.len());

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(recommender, RestConfig::default(), &host, http_port))
    });

    info!("HTTP API: http://{}:{}/", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            match joined {
                Ok(Ok(Ok(()))) => info!("HTTP server stopped"),
                Ok(Ok(Err(e))) => {
                    error!("HTTP server error: {}", e);
                    return Err(e.into());
                }
                Ok(Err(_)) | Err(_) => anyhow::bail!("HTTP server thread panicked"),
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}
