use std::sync::Arc;

use storefront_api::{app, server, ServerConfig};
use storefront_products::ProductService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ServerConfig::products_api()?;
    let products = Arc::new(ProductService::new());
    let app = app::build_app(products);

    tracing::info!("try: http://{}/api/health", config.addr);
    server::run("products-api", config, app).await
}
