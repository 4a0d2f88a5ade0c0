use hexcolor::config::ServerConfig;
use hexcolor::routes;
use hexcolor::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let state = AppState::new(&config);

    let app = routes::app(state);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, strict_status = config.strict_status, "hexcolor listening");
    axum::serve(listener, app).await.expect("server failed");
}
