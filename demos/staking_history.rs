use std::sync::Arc;

use binance_staking_client::auth::EnvCredentials;
use binance_staking_client::rest::staking::{StakingHistoryRequest, StakingPositionRequest};
use binance_staking_client::rest::{BinanceRestClient, StakingApi};
use binance_staking_client::{StakingProductType, StakingTxnType};
use time::{Duration, OffsetDateTime};

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

    let client = BinanceRestClient::builder().credentials(credentials).build();

    let positions = client
        .get_staking_positions(&StakingPositionRequest::new().product(StakingProductType::Staking))
        .await?;
    for position in &positions {
        println!(
            "position {} {} {} (renewable: {}, delivers {:?})",
            position.position_id,
            position.amount,
            position.asset,
            position.renewable,
            position.delivered_at()
        );
    }

    let now = OffsetDateTime::now_utc();
    let request = StakingHistoryRequest::new(StakingProductType::Staking, StakingTxnType::Interest)
        .start_at(now - Duration::days(30))
        .end_at(now)
        .size(100);
    let records = client.get_staking_history(&request).await?;
    println!("Interest payments in the last 30 days: {}", records.len());

    for record in &records {
        println!("{:?} {} {} {}", record.occurred_at(), record.amount, record.asset, record.status);
    }

    Ok(())
}
