use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use reqwest::Method;

use binance_staking_client::error::{ApiError, StakingError};
use binance_staking_client::rest::staking::{
    ListStakingProductsRequest, PurchaseStakingProductRequest, StakingHistoryRequest, StakingPositionRequest,
};
use binance_staking_client::rest::{ParamsLocation, RequestDescriptor, RequestOptions, SecurityType, StakingApi, Transport};
use binance_staking_client::{StakingProductType, StakingTxnType};

/// Replays scripted results and records every descriptor it receives.
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Vec<u8>, StakingError>>>,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl ScriptedTransport {
    fn replying(reply: Result<Vec<u8>, StakingError>) -> Self {
        let transport = Self::default();
        transport.replies.lock().unwrap().push_back(reply);
        transport
    }

    fn seen(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn call_api(
        &self,
        request: &RequestDescriptor,
        _options: &RequestOptions,
    ) -> Result<Vec<u8>, StakingError> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StakingError::InvalidResponse("no scripted reply".into())))
    }
}

#[tokio::test]
async fn test_transport_error_passes_through_unchanged() {
    let transport = ScriptedTransport::replying(Err(StakingError::Api(ApiError {
        code: -1021,
        message: "Timestamp for this request is outside of the recvWindow.".into(),
    })));

    let err = transport
        .list_staking_products(&ListStakingProductsRequest::new())
        .await
        .unwrap_err();

    assert!(!err.is_decode());
    assert!(err.api_error().is_some_and(ApiError::is_invalid_timestamp));
}

#[tokio::test]
async fn test_descriptor_for_purchase() {
    let transport = ScriptedTransport::replying(Ok(br#"{"purchaseId":7}"#.to_vec()));
    let request = PurchaseStakingProductRequest::new(StakingProductType::FlexibleDefi, "BNB*30", 1.5);

    let id = transport.purchase_staking_product(&request).await.unwrap();
    assert_eq!(id, 7);

    let seen = transport.seen();
    assert_eq!(seen.len(), 1);
    let descriptor = &seen[0];
    assert_eq!(descriptor.method(), &Method::POST);
    assert_eq!(descriptor.path(), "/sapi/v1/staking/purchase");
    assert_eq!(descriptor.security(), SecurityType::Signed);
    assert_eq!(descriptor.location(), ParamsLocation::Query);
    assert_eq!(descriptor.params().get("product").as_deref(), Some("F_DEFI"));
    assert_eq!(descriptor.params().get("productId").as_deref(), Some("BNB*30"));
    assert_eq!(descriptor.params().get("amount").as_deref(), Some("1.5"));
    // signing belongs to the transport
    assert!(!descriptor.params().contains_key("timestamp"));
}

#[tokio::test]
async fn test_empty_optional_filters_are_omitted() {
    let transport = ScriptedTransport::replying(Ok(b"[]".to_vec()));

    let positions = transport
        .get_staking_positions(&StakingPositionRequest::new())
        .await
        .unwrap();
    assert!(positions.is_empty());
    assert!(transport.seen()[0].params().is_empty());
}

#[tokio::test]
async fn test_history_mandatory_fields_always_sent() {
    let transport = ScriptedTransport::replying(Ok(b"[]".to_vec()));
    let request = StakingHistoryRequest::new(StakingProductType::Staking, StakingTxnType::Subscription).size(10);

    transport.get_staking_history(&request).await.unwrap();

    let params = transport.seen()[0].params().clone();
    assert_eq!(params.keys(), vec!["product", "txnType", "size"]);
    assert_eq!(params.get("txnType").as_deref(), Some("SUBSCRIPTION"));
}

#[tokio::test]
async fn test_shared_transport_through_arc() {
    let transport = Arc::new(ScriptedTransport::replying(Ok(b"not json".to_vec())));

    let err = transport
        .list_staking_products(&ListStakingProductsRequest::new())
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(transport.seen().len(), 1);
}
