use storefront_api::{app, server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ServerConfig::hello_world()?;

    tracing::info!("try: http://{}/info", config.addr);
    server::run("hello-world", config, app::build_hello_app()).await
}
