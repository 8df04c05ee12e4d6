use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{list, relay};
use crate::{decode, CakeMailError, CakeMailResult, Parameters};

/// Default CakeMail API root.
pub const DEFAULT_BASE_URL: &str = "https://api.wbsrvc.com/";

const API_KEY_HEADER: &str = "apikey";

/// Builder for CakeMail client.
///
/// This builder provides a fluent API for creating CakeMail clients
/// with validation at build time.
#[derive(Default)]
pub struct CakeMailClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl CakeMailClientBuilder {
    /// Sets the API key issued by CakeMail.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Sets the API key from an environment variable.
    pub fn api_key_from_env(mut self, var_name: &str) -> CakeMailResult<Self> {
        let api_key = std::env::var(var_name).map_err(|e| {
            CakeMailError::ConfigurationError(format!(
                "Failed to read environment variable '{}': {}",
                var_name, e
            ))
        })?;
        self.api_key = Some(SecretString::from(api_key));
        Ok(self)
    }

    /// Sets the API root. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// The timeout and user agent settings of this builder are ignored when a
    /// custom client is supplied.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> CakeMailResult<CakeMailClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| CakeMailError::ConfigurationError("API key is required".into()))?;
        HeaderValue::from_str(api_key.expose_secret())
            .map_err(|e| CakeMailError::ConfigurationError(format!("Invalid API key: {e}")))?;

        let mut base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| CakeMailError::ConfigurationError(format!("Invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CakeMailError::ConfigurationError(format!(
                "Invalid base URL: {base_url} cannot be used as a base"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("cakemail-client/", env!("CARGO_PKG_VERSION")));

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    CakeMailError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?,
        };

        Ok(CakeMailClient {
            api_key: Arc::new(api_key),
            base_url,
            timeout,
            http_client,
        })
    }
}

/// The main client for interacting with the CakeMail API.
///
/// Cloning is cheap and clones share the underlying connection pool. Every
/// call is a single request; dropping the returned future cancels it.
#[derive(Clone)]
pub struct CakeMailClient {
    api_key: Arc<SecretString>,
    base_url: Url,
    timeout: Duration,
    http_client: ReqwestClient,
}

impl fmt::Debug for CakeMailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CakeMailClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl CakeMailClient {
    pub fn builder() -> CakeMailClientBuilder {
        CakeMailClientBuilder::default()
    }

    /// Gets the API root requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets the relay API interface.
    pub fn relays(&self) -> relay::RelayHandler {
        relay::RelayHandler::new(self.clone())
    }

    /// Gets the list API interface.
    pub fn lists(&self) -> list::ListHandler {
        list::ListHandler::new(self.clone())
    }

    fn endpoint_url(&self, endpoint: &str) -> CakeMailResult<Url> {
        if endpoint.contains('?') || endpoint.contains('#') {
            return Err(CakeMailError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }
        if Url::parse(endpoint).is_ok() {
            return Err(CakeMailError::InvalidEndpoint(format!(
                "endpoint must be a relative path: {endpoint}"
            )));
        }
        let relative = endpoint.trim_start_matches('/');
        if relative.is_empty() {
            return Err(CakeMailError::InvalidEndpoint("endpoint must not be empty".into()));
        }

        let url = self.base_url.join(relative)?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(CakeMailError::InvalidEndpoint(format!(
                "endpoint resolves outside of {}: {endpoint}",
                self.base_url
            )));
        }
        Ok(url)
    }

    fn headers(&self) -> CakeMailResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|e| CakeMailError::ConfigurationError(format!("Invalid API key: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Makes a request to the CakeMail API and decodes the response.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API method path relative to the base URL (e.g.,
    ///   "Relay/Send").
    /// * `params` - The form parameters, in the order they are sent.
    /// * `array_property` - Name of the property of `data` holding the
    ///   result array, for listing endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is not a relative path under the base URL, or contains
    ///   a query string or fragment.
    /// - The request fails due to network issues.
    /// - The response is not a success or not a valid envelope.
    /// - The envelope reports a failure.
    /// - The payload does not match `R`.
    pub async fn request<R>(
        &self,
        endpoint: &str,
        params: &Parameters,
        array_property: Option<&str>,
    ) -> CakeMailResult<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;

        log::debug!("POST {} ({} parameters)", url, params.len());

        let response = self
            .http_client
            .post(url.clone())
            .headers(self.headers()?)
            .form(params.as_slice())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        log::debug!("{} answered {}", url, status);

        decode(&body, status, &url, array_property)
    }

    /// Makes a raw request to the CakeMail API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `relays()`, `lists()`) when possible.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cakemail_client::{CakeMailClient, CakeMailError, Parameters};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), CakeMailError> {
    /// let client = CakeMailClient::builder().api_key("your-api-key").build()?;
    ///
    /// let mut params = Parameters::new();
    /// params.push("user_key", "your-user-key");
    ///
    /// let info = client.raw_request("User/GetInfo", &params).await?;
    /// println!("User info: {:?}", info);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request(&self, endpoint: &str, params: &Parameters) -> CakeMailResult<Value> {
        self.request(endpoint, params, None).await
    }
}
