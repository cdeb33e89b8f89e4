use inventory_tracker::clients::DashboardClient;
use inventory_tracker::dashboard::{AutoConfirm, DashboardContext, SaveMode};
use inventory_tracker::lifecycle::{setup_tracing, InventoryConfig, InventorySystem};
use inventory_tracker::views::{ProductForm, TimestampIds};
use tracing::{error, info, Instrument};

async fn log_stats(client: &DashboardClient, step: &str) -> Result<(), String> {
    let stats = client.stats().await.map_err(|e| e.to_string())?;
    info!(
        step,
        products = stats.total_products,
        value = stats.total_value,
        low = stats.low_stock_items,
        out = stats.out_of_stock_items,
        purchased = stats.total_purchased,
        marketplaces = ?stats.marketplace_distribution,
        "Stats"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => InventoryConfig::from_file(&path).map_err(|e| e.to_string())?,
        None => InventoryConfig::default(),
    };
    info!(?config, "Starting inventory tracker");

    let system = InventorySystem::start(&config, DashboardContext::new(AutoConfirm(true)));
    let client = system.client.clone();
    let ids = TimestampIds::new();

    log_stats(&client, "loaded").await?;

    // New purchase of a product that is not in the catalog yet
    let form = ProductForm {
        name: "Bamboo Desk Lamp".to_string(),
        sku: "BDL-003".to_string(),
        marketplace: "meesho".to_string(),
        category: "Home".to_string(),
        price: 1499.0,
        cost_price: 900.0,
        stock: 20,
        min_stock: 5,
        ..ProductForm::new()
    };
    let lamp = form.submit(None, &ids).map_err(|e| e.to_string())?;
    let lamp_id = lamp.id.clone();

    let span = tracing::info_span!("purchase");
    async {
        client
            .save(lamp.clone(), SaveMode::NewPurchase)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    log_stats(&client, "purchase").await?;

    // Customer returns more than we have on hand; stock bottoms out at zero
    let mut returned = lamp;
    returned.stock = 25;
    let span = tracing::info_span!("return");
    async {
        client
            .save(returned, SaveMode::Return)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    log_stats(&client, "return").await?;

    // Edit a seeded product through the form
    if let Some(earbuds) = client.get("1".to_string()).await.map_err(|e| e.to_string())? {
        let mut form = ProductForm::edit(&earbuds);
        form.price = 2799.0;
        match form
            .submit_to(&client, Some(&earbuds), &ids, SaveMode::Upsert)
            .await
        {
            Ok(outcome) => info!(?outcome, "Edited"),
            Err(e) => error!(error = %e, "Edit failed"),
        }
        log_stats(&client, "edit").await?;
    }

    let outcome = client
        .request_delete(lamp_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(?outcome, "Delete");
    log_stats(&client, "delete").await?;

    drop(client);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Done");
    Ok(())
}
