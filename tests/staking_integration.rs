use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_staking_client::auth::{Credentials, FixedTimestamp, StaticCredentials, sign_request};
use binance_staking_client::error::StakingError;
use binance_staking_client::rest::staking::{
    LeftDailyPurchaseQuotaRequest, ListStakingProductsRequest, PersonalLeftQuotaRequest,
    PurchaseStakingProductRequest, RedeemStakingProductRequest, SetAutoStakingRequest,
    StakingHistoryRequest, StakingPositionRequest,
};
use binance_staking_client::rest::{BinanceRestClient, RequestOptions, StakingApi};
use binance_staking_client::{StakingProductType, StakingTxnType};

const TIMESTAMP: i64 = 1_700_000_000_000;

fn build_client(server: &MockServer) -> BinanceRestClient {
    BinanceRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .timestamp_provider(Arc::new(FixedTimestamp(TIMESTAMP)))
        .build()
}

async fn only_request_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "exactly one request per call");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[tokio::test]
async fn test_list_staking_products() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "projectId": "Axs*90",
            "detail": {
                "asset": "AXS",
                "rewardAsset": "AXS",
                "duration": 90,
                "renewable": true,
                "apy": "1.2069"
            },
            "quota": { "totalPersonalQuota": "2", "minimum": "0.001" }
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/productList"))
        .and(query_param("asset", "BNB"))
        .and(query_param("current", "2"))
        .and(query_param("size", "50"))
        .and(header("X-MBX-APIKEY", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ListStakingProductsRequest::new().asset("BNB").current(2).size(50);
    let products = client.list_staking_products(&request).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].project_id, "Axs*90");
    assert_eq!(products[0].detail.reward_asset, "AXS");
    assert_eq!(products[0].quota.total_personal_quota, Decimal::from(2));

    let query = only_request_query(&server).await;
    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["asset", "current", "size", "timestamp", "signature"]);

    let expected = sign_request(
        &Credentials::new("test_key", "test_secret"),
        &format!("asset=BNB&current=2&size=50&timestamp={TIMESTAMP}"),
    )
    .unwrap();
    assert_eq!(query[4].1, expected);
}

#[tokio::test]
async fn test_purchase_staking_product() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/staking/purchase"))
        .and(query_param("product", "STAKING"))
        .and(query_param("productId", "abc"))
        .and(header_exists("X-MBX-APIKEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "purchaseId": 40607 })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PurchaseStakingProductRequest::new(StakingProductType::Staking, "abc", 0.0);
    let purchase_id = client.purchase_staking_product(&request).await.unwrap();
    assert_eq!(purchase_id, 40607);

    let query = only_request_query(&server).await;
    let amount = query.iter().find(|(k, _)| k == "amount").map(|(_, v)| v.clone());
    assert_eq!(amount.map(|v| v.parse::<f64>().unwrap()), Some(0.0));
}

#[tokio::test]
async fn test_get_personal_left_quota_sends_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/personalLeftQuota"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("product=STAKING&productId=Axs*90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "leftPersonalQuota": "1000" })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PersonalLeftQuotaRequest::new(StakingProductType::Staking, "Axs*90");
    let quota = client.get_personal_left_quota(&request).await.unwrap();
    assert_eq!(quota, Decimal::from(1000));

    let query = only_request_query(&server).await;
    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["timestamp", "signature"]);

    let expected = sign_request(
        &Credentials::new("test_key", "test_secret"),
        &format!("timestamp={TIMESTAMP}product=STAKING&productId=Axs*90"),
    )
    .unwrap();
    assert_eq!(query[1].1, expected);
}

#[tokio::test]
async fn test_get_staking_positions() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "positionId": 123123,
        "productId": "Axs*90",
        "asset": "AXS",
        "amount": "122.09202928",
        "purchaseTime": 1646182276000u64,
        "duration": 90,
        "accrualDays": 4,
        "rewardAsset": "AXS",
        "rewardAmt": "5.17181528",
        "nextInterestPay": "1.29295383",
        "payInterestPeriod": 1,
        "redeemAmountEarly": "",
        "interestEndDate": 1654012800000u64,
        "deliverDate": 1654272000000u64,
        "redeemPeriod": 1,
        "canRedeemEarly": true,
        "renewable": true,
        "type": "AUTO",
        "status": "HOLDING"
    }]);

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/position"))
        .and(query_param("product", "STAKING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = StakingPositionRequest::new().product(StakingProductType::Staking);
    let positions = client.get_staking_positions(&request).await.unwrap();

    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].position_id, 123123);
    assert!(positions[0].redeem_amount_early.is_zero());
    assert_eq!(positions[0].status, "HOLDING");

    // productId is not implied by product
    let query = only_request_query(&server).await;
    assert!(query.iter().all(|(k, _)| k != "productId"));
}

#[tokio::test]
async fn test_get_staking_history() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "positionId": "123123",
        "time": 1575018510000u64,
        "asset": "BNB",
        "project": "BSC",
        "amount": "21312.23223",
        "lockPeriod": "30",
        "deliverDate": "1575018510000",
        "type": "AUTO",
        "status": "success"
    }]);

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/stakingRecord"))
        .and(query_param("product", "L_DEFI"))
        .and(query_param("txnType", "INTEREST"))
        .and(query_param("startTime", "1575018510000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = StakingHistoryRequest::new(StakingProductType::LockedDefi, StakingTxnType::Interest)
        .start_time(1_575_018_510_000);
    let records = client.get_staking_history(&request).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount.to_string(), "21312.23223");
    assert_eq!(records[0].record_type, "AUTO");

    let query = only_request_query(&server).await;
    assert!(query.iter().all(|(k, _)| k != "asset" && k != "endTime" && k != "size"));
}

#[tokio::test]
async fn test_get_left_daily_purchase_quota() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/lending/daily/userLeftQuota"))
        .and(query_param("productId", "USDT001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "asset": "USDT", "leftQuota": "50000.00000000" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quota = client
        .get_left_daily_purchase_quota(&LeftDailyPurchaseQuotaRequest::new("USDT001"))
        .await
        .unwrap();
    assert_eq!(quota, Decimal::from(50_000));
}

#[tokio::test]
async fn test_redeem_and_set_auto_staking() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/staking/redeem"))
        .and(query_param("positionId", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/staking/setAutoStaking"))
        .and(query_param("renewable", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let redeemed = client
        .redeem_staking_product(
            &RedeemStakingProductRequest::new(StakingProductType::Staking, "Axs*90").position_id("1234"),
        )
        .await
        .unwrap();
    assert!(redeemed);

    let renewed = client
        .set_auto_staking(&SetAutoStakingRequest::new(StakingProductType::Staking, "1234", true))
        .await
        .unwrap();
    assert!(renewed);
}

#[tokio::test]
async fn test_api_error_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/staking/purchase"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -6012,
            "msg": "Balance not enough"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PurchaseStakingProductRequest::new(StakingProductType::Staking, "abc", 10.0);
    let err = client.purchase_staking_product(&request).await.unwrap_err();

    assert!(err.is_transport());
    let api_error = err.api_error().expect("API error");
    assert_eq!(api_error.code, -6012);
    assert!(api_error.is_insufficient_balance());
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/productList"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\""))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .list_staking_products(&ListStakingProductsRequest::new())
        .await
        .unwrap_err();

    assert!(err.is_decode());
    match err {
        StakingError::Decode { body, .. } => assert_eq!(body, "{\"not\": \"a list\""),
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/staking/purchase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "purchaseId": "abc" })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PurchaseStakingProductRequest::new(StakingProductType::Staking, "abc", 1.0);
    let err = client.purchase_staking_product(&request).await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_missing_credentials_sends_nothing() {
    let server = MockServer::start().await;
    let client = BinanceRestClient::builder().base_url(server.uri()).build();

    let err = client
        .get_left_daily_purchase_quota(&LeftDailyPurchaseQuotaRequest::new("USDT001"))
        .await
        .unwrap_err();

    assert!(matches!(err, StakingError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_options_override() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/productList"))
        .and(query_param("recvWindow", "20000"))
        .and(header("x-request-tag", "staking-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = RequestOptions::new()
        .recv_window(20_000)
        .timeout(Duration::from_secs(5))
        .header(
            reqwest::header::HeaderName::from_static("x-request-tag"),
            reqwest::header::HeaderValue::from_static("staking-test"),
        );
    let products = client
        .execute_with(&ListStakingProductsRequest::new(), &options)
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/staking/productList"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = RequestOptions::new().timeout(Duration::from_millis(50));
    let err = client
        .execute_with(&ListStakingProductsRequest::new(), &options)
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_decode());
}
