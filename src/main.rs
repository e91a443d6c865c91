use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrumboard::{ai, api, board};

#[derive(Parser)]
#[command(name = "scrumboard")]
#[command(about = "Scrum board server with sprint burndown and AI-assisted planning")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the scrum board server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "7420")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "scrumboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let board = board::Board::new();
    let gateway = ai::GatewayClient::from_env();
    if gateway.is_none() {
        tracing::warn!("SCRUMBOARD_AI_KEY not set; AI features disabled");
    }

    let app = api::create_router(board, gateway);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Scrum board listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting scrum board server on port {}", port);
            serve(port).await?;
        }
        None => {
            // Default: start server on the default port
            tracing::info!("Starting scrum board server on port 7420");
            serve(7420).await?;
        }
    }

    Ok(())
}
