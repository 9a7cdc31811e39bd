use dotenvy::dotenv;
use emekdep::router::init_router;
use emekdep::state::init_app_state;
use emekdep_config::ServerConfig;
use emekdep_observability::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();
    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
