//! Demo session: seeds a product, edits it, walks a few routes and shuts down.
//!
//! Data lands in the platform data directory unless `PRODUCT_INVENTORY_DIR` is set.

use product_inventory::config::InventoryConfig;
use product_inventory::framework::CollectionClient;
use product_inventory::lifecycle::{setup_tracing, InventorySystem};
use product_inventory::model::ProductDraft;
use product_inventory::routes;
use std::error::Error;
use tracing::{info, warn, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let mut config = InventoryConfig::default();
    if let Some(dir) = std::env::var_os("PRODUCT_INVENTORY_DIR") {
        config = config.with_data_dir(dir);
    }

    info!(data_dir = %config.data_dir.display(), "Starting product inventory");
    let system = InventorySystem::new(&config);
    let client = system.product_client.clone();

    let existing = client.list().await?;
    info!(count = existing.len(), "Products on record");

    let span = tracing::info_span!("create_product");
    let id = async {
        info!("Submitting create form");
        client
            .add_product(ProductDraft::new("Notebook", "Stationery", "3.20", "25"))
            .await
    }
    .instrument(span)
    .await?;
    info!(%id, "Product created");

    let span = tracing::info_span!("edit_product");
    async {
        let mut product = client.require(id).await?;
        product.quantity -= 5.0;
        if !client.update_product(product).await? {
            warn!(%id, "Product vanished before edit");
        }
        Ok::<_, product_inventory::product_store::ProductError>(())
    }
    .instrument(span)
    .await?;

    let paths = [
        "/".to_string(),
        format!("/products/{id}"),
        format!("/products/{id}/edit"),
        "/missing".to_string(),
    ];
    for path in &paths {
        let route = routes::resolve(path);
        info!(%path, page = ?route.page, layout = route.page.uses_main_layout(), "Route");
    }

    if client.delete(id).await? {
        info!(%id, "Demo product removed");
    }

    drop(client);
    let store = system.shutdown().await?;
    info!(remaining = store.len(), "Application completed successfully");
    Ok(())
}
