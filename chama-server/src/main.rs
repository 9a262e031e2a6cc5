use chama_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv, logging, configuration
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        timezone = %config.business_timezone,
        "🦀 Chama Server starting..."
    );

    // 2. State (spawns the reminder worker)
    let state = ServerState::initialize(&config).await;

    // 3. Serve
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
