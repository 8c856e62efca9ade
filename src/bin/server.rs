use log::info;

use recipe_import::server::app;
use recipe_import::ImporterConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ImporterConfig::load()?;
    let addr = config.listen_addr.clone();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("importer-server listening on {addr}");
    axum::serve(listener, app(config)).await?;

    Ok(())
}
