use std::sync::Arc;

mod api;
mod cache;
mod classifier;
mod config;
mod error;
mod funfact;
mod handler;
mod http;
mod logger;
mod server;

use error::ServerError;
use funfact::{FunFactSource, HttpFunFactSource};

fn main() -> Result<(), ServerError> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, sizing worker threads from configuration
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        tracing::info!("Using {workers} worker threads");
    } else {
        tracing::info!("Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let fun_facts: Arc<dyn FunFactSource> = Arc::new(HttpFunFactSource::new(&cfg.fun_fact)?);
    let state = Arc::new(config::AppState::new(&cfg, fun_facts));

    logger::log_server_start(&addr, &cfg);

    server::start_server_loop(listener, state, server::shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}
