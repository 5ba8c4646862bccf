//! Binance REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{CredentialsProvider, SystemClock, TimestampProvider, sign_request};
use crate::error::{ApiError, StakingError};
use crate::rest::endpoints::{BINANCE_BASE_URL, BINANCE_TESTNET_BASE_URL};
use crate::rest::request::{Params, ParamsLocation, RequestDescriptor, RequestOptions, SecurityType};
use crate::rest::traits::Transport;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-mbx-apikey");

/// The Binance REST API client.
///
/// Signs requests, sends them and hands back raw response bodies. Endpoint operations are
/// provided by the [`StakingApi`](crate::rest::StakingApi) trait, which every
/// [`Transport`] implements.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use binance_staking_client::auth::StaticCredentials;
/// use binance_staking_client::rest::staking::StakingPositionRequest;
/// use binance_staking_client::rest::{BinanceRestClient, StakingApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BinanceRestClient::builder()
///         .credentials(credentials)
///         .recv_window(10_000)
///         .build();
///
///     let positions = client
///         .get_staking_positions(&StakingPositionRequest::new().asset("BNB"))
///         .await?;
///     println!("Positions: {:?}", positions);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: Option<u64>,
}

impl BinanceRestClient {
    /// Create a new client with default settings.
    ///
    /// Without credentials only public endpoints work; every staking endpoint is signed.
    /// Use [`BinanceRestClient::builder()`] to configure credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BinanceRestClientBuilder {
        BinanceRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Split the descriptor's parameters into query and form parts, adding
    /// `recvWindow`, `timestamp` and `signature` to the query for signed requests.
    fn prepare(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<(Params, Params, HeaderMap), StakingError> {
        let (mut query, form) = match request.location() {
            ParamsLocation::Query => (request.params().clone(), Params::new()),
            ParamsLocation::Form => (Params::new(), request.params().clone()),
        };

        let mut headers = HeaderMap::new();
        if request.security() == SecurityType::None {
            return Ok((query, form, headers));
        }

        let creds = self
            .credentials
            .as_ref()
            .ok_or(StakingError::MissingCredentials)?
            .get_credentials();
        headers.insert(API_KEY_HEADER, creds.api_key_header()?);

        if request.security() == SecurityType::Signed {
            if let Some(recv_window) = options.recv_window.or(self.recv_window) {
                query.append("recvWindow", recv_window.to_string());
            }
            query.append("timestamp", self.timestamp_provider.timestamp_millis().to_string());

            let payload = format!("{}{}", query.as_str(), form.as_str());
            let signature = sign_request(creds, &payload)?;
            query.append("signature", signature);
        }

        Ok((query, form, headers))
    }

    /// Turn a non-success response into an error.
    fn rejection(status: reqwest::StatusCode, body: &[u8]) -> StakingError {
        match ApiError::from_body(body) {
            Some(api_error) => {
                tracing::warn!(%status, code = api_error.code, msg = %api_error.message, "Binance rejected request");
                StakingError::Api(api_error)
            }
            None => StakingError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                String::from_utf8_lossy(body)
            )),
        }
    }
}

impl Transport for BinanceRestClient {
    async fn call_api(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<Vec<u8>, StakingError> {
        let (query, form, headers) = self.prepare(request, options)?;

        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path()))?;
        if !query.is_empty() {
            url.set_query(Some(query.as_str()));
        }

        let mut builder = self
            .http_client
            .request(request.method().clone(), url)
            .headers(headers)
            .headers(options.headers.clone());
        if !form.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form.as_str().to_owned());
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, path = request.path(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(Self::rejection(status, &body));
        }
        Ok(body.to_vec())
    }
}

impl Default for BinanceRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`BinanceRestClient`].
pub struct BinanceRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    time_offset_ms: i64,
    recv_window: Option<u64>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl BinanceRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BINANCE_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            time_offset_ms: 0,
            recv_window: None,
            user_agent: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use the Binance testnet.
    pub fn testnet(self) -> Self {
        self.base_url(BINANCE_TESTNET_BASE_URL)
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider. Overrides [`time_offset_ms`](Self::time_offset_ms).
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Shift request timestamps by `offset_ms` (server time minus local time).
    pub fn time_offset_ms(mut self, offset_ms: i64) -> Self {
        self.time_offset_ms = offset_ms;
        self
    }

    /// Default `recvWindow` in milliseconds for signed requests.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Defaults to 0. A retried purchase may execute twice, so enable this only when
    /// duplicates are acceptable.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> BinanceRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-staking-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-staking-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let time_offset_ms = self.time_offset_ms;
        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock::with_offset(time_offset_ms)));

        BinanceRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        }
    }
}

impl Default for BinanceRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
