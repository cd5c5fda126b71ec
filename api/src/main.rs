use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutripick_api::application::http::server::http_server;
use nutripick_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(Args::parse());
    let state = http_server::state(args.clone());
    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "nutripick api listening");
    axum::serve(listener, router).await?;

    Ok(())
}
