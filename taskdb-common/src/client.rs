use {
    std::time::Duration,
    tracing::{debug, info},
    anyhow::{Result, Context, bail},
    config::Config,
    reqwest::{Client, Method, RequestBuilder, StatusCode},
    serde::{Serialize, de::DeserializeOwned},
    crate::{
        entities::Envelope,
        utils::DEFAULT_TIMEOUT_SECS,
    },
};

const HEALTH_PATH: &str = "/api/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl ConnectionSettings {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let port = config.get_int("port")?;
        let timeout_secs = config.get_int("timeout_secs")?;

        Ok(Self {
            host: config.get_string("host")?,
            port: u16::try_from(port).with_context(|| format!("port {} is out of range", port))?,
            timeout: Duration::from_secs(u64::try_from(timeout_secs).with_context(|| format!("timeout {} is negative", timeout_secs))?),
        })
    }

    /// Command line flags win over the config file and environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_created(&self) -> bool {
        matches!(self.status.as_u16(), 200 | 201)
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.status.as_u16(), 200 | 204)
    }

    /// The `message` the service put next to `data`, if the body is an envelope at all.
    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<Envelope<serde_json::Value>>(&self.body)
            .ok()
            .and_then(|v| v.message)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("failed to parse response body: {}", self.body))
    }
}

/// Keep-alive client for the task service. Requests are issued one at a time and share the
/// same connection pool and per-request timeout.
pub struct ApiClient {
    client: Client,
    base_url: String,
    address: String,
}

impl ApiClient {
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            client,
            base_url: format!("http://{}", settings.address()),
            address: settings.address(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Liveness probe. Anything other than 200 is fatal, there is no retry.
    pub async fn check_health(&self) -> Result<()> {
        let res = self.get(HEALTH_PATH).await?;
        if res.status != StatusCode::OK {
            debug!(status = res.status.as_u16(), api_message = res.message().as_deref(), body = res.body.as_str(), "health check failed");
            bail!("Cannot connect to API at {}", self.address);
        }

        info!(address = self.address.as_str(), "connected to api");
        Ok(())
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, self.client.get(self.url(path))).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        self.send(Method::POST, path, self.client.post(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, self.client.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<ApiResponse> {
        let res = request.send()
            .await
            .with_context(|| format!("failed to send {} {} to {}", method, path, self.address))?;

        let status = res.status();
        let body = res.text()
            .await
            .with_context(|| format!("failed to read response to {} {}", method, path))?;

        debug!(method = method.as_str(), path, status = status.as_u16(), "api request finished");

        Ok(ApiResponse {
            status,
            body,
        })
    }
}
