use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock_server::{AppState, Store};

/// | Env Var     | Default     |
/// |-------------|-------------|
/// | `HOST`      | `127.0.0.1` |
/// | `PORT`      | `8001`      |
/// | `MOCK_SEED` | unset       |
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8001".into());
    let seed = std::env::var("MOCK_SEED").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let store = if seed { Store::seeded() } else { Store::default() };
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seed, "portfolio mock backend listening");
    mock_server::run_with_state(listener, AppState::new(store)).await
}
