mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Missing access code is non-fatal: advisor login stays disabled
    // until the environment is configured.
    let access = match state::AccessConfig::from_env() {
        Some(config) => Some(config),
        None => {
            tracing::warn!("ACCESS_CODE not set — advisor login disabled");
            None
        }
    };

    let state = state::AppState::new(access);

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "canfs listening");
    axum::serve(listener, app).await.expect("server failed");
}
