use crate::FetchError;
use crate::http::common::{BaseUrls, Endpoint, construct_endpoint_url};
use crate::http::fetch;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("countries-rs/", env!("CARGO_PKG_VERSION"));

/// The main client for the country-lookup and reverse-geocoding APIs.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    #[allow(clippy::struct_field_names)]
    pub(crate) http_client: ReqwestClient,
    pub(crate) base_urls: BaseUrls,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use countries_rs::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()
///     .expect("client should build");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    base_urls: BaseUrls,
}

impl ClientBuilder {
    /// Sets the total request timeout applied by the HTTP client.
    ///
    /// If not set, requests have no timeout. To bound a single call instead,
    /// wrap it in [`with_deadline`](crate::with_deadline).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header (default: `countries-rs/<version>`).
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Overrides the country-lookup base URL (default: `https://restcountries.com`).
    #[must_use]
    pub fn countries_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_urls.countries = url.into();
        self
    }

    /// Overrides the reverse-geocoding base URL (default: `https://geocode.xyz`).
    #[must_use]
    pub fn geocode_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_urls.geocode = url.into();
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client cannot be
    /// constructed (for example, TLS backend initialization failed).
    pub fn build(self) -> Result<Client, FetchError> {
        let mut builder = ReqwestClient::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Client {
            http_client,
            base_urls: self.base_urls,
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client with default settings, pointed at the public APIs.
    ///
    /// Equivalent to `Client::builder().build()`.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built, like `reqwest::Client::new`.
    /// Use [`Client::builder`] to handle that case as an error.
    #[must_use]
    pub fn new() -> Self {
        Self::builder()
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Fetches `url` and decodes its JSON body into `T`.
    ///
    /// `label` describes the failure when the server answers with a non-2xx
    /// status; it defaults to `"Something went wrong"`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] if no response arrived
    /// - [`FetchError::Status`] on a non-2xx status
    /// - [`FetchError::Decode`] if the body is not valid JSON for `T`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countries_rs::Client;
    ///
    /// # async fn example() -> Result<(), countries_rs::FetchError> {
    /// let client = Client::new();
    /// let body = client
    ///     .get_json_value("https://restcountries.com/v2/name/portugal", Some("Country not found"))
    ///     .await?;
    /// println!("{}", body[0]["capital"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        label: Option<&str>,
    ) -> Result<T, FetchError> {
        fetch::get_json(&self.http_client, url, label).await
    }

    /// Fetches `url` and returns its body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Client::get_json`].
    pub async fn get_json_value(
        &self,
        url: &str,
        label: Option<&str>,
    ) -> Result<Value, FetchError> {
        fetch::get_json_value(&self.http_client, url, label).await
    }

    pub(crate) fn endpoint_url(&self, endpoint: Endpoint) -> String {
        construct_endpoint_url(&self.base_urls, endpoint)
    }
}
