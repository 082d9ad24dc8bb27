use clap::{Parser, Subcommand};

use ratefeed_server::api::app_router;
use ratefeed_server::config::Config;
use ratefeed_server::state::{build_state, init_tracing};

#[derive(Parser)]
#[command(name = "ratefeed-server", about = "Currency quote feed service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve,
    /// Run one feed import pass and exit
    Import,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing();

    let state = build_state(&config)?;

    match cli.command {
        Command::Serve => {
            let router = app_router(state, &config);
            tracing::info!("Listening on {}", config.listen_addr);
            let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
            axum::serve(listener, router).await?;
        }
        Command::Import => {
            state.quote_service.import().await?;
            tracing::info!("Import finished");
        }
    }

    Ok(())
}
