use pos_server::{Config, ServerState, api, utils};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    utils::logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Starting pos-server (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;
    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("pos-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
