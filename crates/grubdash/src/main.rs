use actor_framework::setup_tracing;
use anyhow::Context;
use clap::Parser;
use grubdash::api::{self, AppState};
use grubdash::arguments::Arguments;
use grubdash::lifecycle::GrubDashSystem;
use grubdash::seed::Seed;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    setup_tracing(&args.log_filter);
    info!("running grubdash with validated arguments:\n{}", args);

    let seed = match &args.seed_file {
        Some(path) => Seed::load(path).await?,
        None => Seed::default(),
    };
    let system =
        GrubDashSystem::with_seed(args.actor_buffer, seed).context("starting repositories")?;

    let listener = tokio::net::TcpListener::bind(args.bind_address)
        .await
        .with_context(|| format!("binding {}", args.bind_address))?;
    info!(address = %args.bind_address, "Listening");

    axum::serve(listener, api::router(AppState::from(&system)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    system.shutdown().await.context("stopping repositories")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl-c, shutting down");
}
