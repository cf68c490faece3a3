pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = config.static_dir();
    let state = shared::state::AppState::from_fixtures(&static_dir, config.auth.tokens.clone())?;
    tracing::info!(
        "Seeded {} rooms, {} bookings, {} facilities, {} users",
        state.rooms.read().await.len(),
        state.bookings.read().await.len(),
        state.facilities.read().await.len(),
        state.users.read().await.len()
    );

    let app = routes::build(state, &static_dir);

    let addr = config.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    tracing::info!("Serving fixtures from {}", static_dir.display());
    axum::serve(listener, app).await?;

    Ok(())
}
