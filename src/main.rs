use std::net::SocketAddr;
use std::sync::Arc;
use student_entry::{Config, StudentService, SupabaseStore, api};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize tracing
    let default_level = config.as_ref().map(|c| c.log_level.clone()).unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = config.inspect_err(|e| error!("{}", e))?;
    info!(?config, "configuration loaded");

    let store = SupabaseStore::new(&config.supabase_url, &config.supabase_key).inspect_err(|e| error!("{}", e))?;
    let service = Arc::new(StudentService::new(Arc::new(store)));
    let app = api::app(service);

    // Start server
    let addr = SocketAddr::new(config.host, config.port);
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
