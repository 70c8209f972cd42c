pub const MAINNET_DOMAIN: &str = "https://api.bybit.com";
pub const TESTNET_DOMAIN: &str = "https://api-testnet.bybit.com";

#[derive(Debug, Clone)]
pub struct BybitClient {
    pub testnet: bool,
    pub api_key: String,
    pub secret_key: String,
    pub domain: String,
    pub http: reqwest::Client,
}

impl BybitClient {
    pub fn new(
        testnet: bool,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self::with_http_client(testnet, api_key, secret_key, domain, reqwest::Client::new())
    }

    /// Caller-supplied transport; timeouts and proxies are its concern.
    pub fn with_http_client(
        testnet: bool,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        domain: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        BybitClient {
            testnet,
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            domain: domain.into(),
            http,
        }
    }

    pub fn mainnet(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::new(false, api_key, secret_key, MAINNET_DOMAIN)
    }

    pub fn testnet(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::new(true, api_key, secret_key, TESTNET_DOMAIN)
    }
}
