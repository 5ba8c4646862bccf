use std::sync::Arc;

use binance_staking_client::StakingProductType;
use binance_staking_client::auth::EnvCredentials;
use binance_staking_client::rest::staking::{ListStakingProductsRequest, PersonalLeftQuotaRequest};
use binance_staking_client::rest::{BinanceRestClient, StakingApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = BinanceRestClient::builder()
        .credentials(credentials)
        .recv_window(10_000)
        .build();

    let request = ListStakingProductsRequest::new()
        .product(StakingProductType::Staking)
        .asset("BNB");
    let products = client.list_staking_products(&request).await?;
    println!("Staking products: {}", products.len());

    for product in &products {
        println!(
            "{}: {} days at {} APY, min {}",
            product.project_id, product.detail.duration, product.detail.apy, product.quota.minimum
        );
    }

    if let Some(product) = products.first() {
        let quota_request = PersonalLeftQuotaRequest::new(StakingProductType::Staking, &product.project_id);
        let left = client.get_personal_left_quota(&quota_request).await?;
        println!("Personal quota left for {}: {}", product.project_id, left);
    }

    Ok(())
}
