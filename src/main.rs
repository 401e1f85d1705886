mod backend;
mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;
    let backend = backend::BackendClient::new(&config).expect("backend client init failed");
    tracing::info!(backend = %config.backend_url, secure_cookie = config.cookie_secure, "backend configured");

    let state = state::AppState::new(backend, config);
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "stockdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
