use anyhow::Context;
use msgcheck::routes;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let addr =
        std::env::var("MSGCHECK_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let app = routes::create_router();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "msgcheck server listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
