mod relay;
mod routes;
mod state;

use std::sync::Arc;

use forms::Relay;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: pages still render, form endpoints answer 503.
    let relay: Option<Arc<dyn Relay>> = match relay::RelayClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider_name(), "mail relay initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "mail relay not configured; form submissions disabled");
            None
        }
    };

    let state = state::AppState::new(relay);
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tektonika site listening");
    axum::serve(listener, app).await.expect("server failed");
}
