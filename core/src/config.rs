//! Client configuration: service URL, identification and default headers.

use url::Url;

use crate::error::{ApiError, Result};
use crate::http::merge_headers;

pub const DEFAULT_SERVICE_NAME: &str = "lakehouse";
pub const DEFAULT_SERVICE_VERSION: &str = "V1";

/// Name of the per-operation identification header.
pub const ANALYTICS_HEADER: &str = "X-SDK-Analytics";

/// Read-only client configuration.
///
/// Everything here is fixed once the client is built. Credentials are not
/// modelled; callers that need an `Authorization` header either add it as a
/// default header or let their transport attach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_url: String,
    pub service_name: String,
    pub service_version: String,
    pub user_agent: String,
    pub default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into().trim_end_matches('/').to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            user_agent: format!("lakehouse-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
            default_headers: Vec::new(),
        }
    }

    /// Read the configuration from `LAKEHOUSE_URL`, `LAKEHOUSE_SERVICE_NAME`
    /// and `LAKEHOUSE_SERVICE_VERSION`. Only the URL is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("LAKEHOUSE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::Config("LAKEHOUSE_URL is not set".to_string()))?;
        let mut config = Self::new(url);
        if let Some(name) = lookup("LAKEHOUSE_SERVICE_NAME") {
            config = config.with_service_name(name);
        }
        if let Some(version) = lookup("LAKEHOUSE_SERVICE_VERSION") {
            config = config.with_service_version(version);
        }
        config.check()?;
        Ok(config)
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request, e.g. `Authorization`.
    ///
    /// A header already configured under the same name, in any case, is
    /// replaced.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        merge_headers(&mut self.default_headers, vec![(name.into(), value.into())]);
        self
    }

    /// Parse the service URL. Only absolute http(s) URLs with a host and no
    /// query or fragment can have operation paths appended.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.service_url).map_err(|e| {
            ApiError::Config(format!("invalid service URL {:?}: {e}", self.service_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "service URL must use http or https, got {:?}",
                self.service_url
            )));
        }
        if url.host().is_none() {
            return Err(ApiError::Config(format!(
                "service URL has no host: {:?}",
                self.service_url
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::Config(format!(
                "service URL must not carry a query or fragment: {:?}",
                self.service_url
            )));
        }
        Ok(url)
    }

    /// Reject configurations that cannot produce a request URL.
    pub fn check(&self) -> Result<()> {
        self.base_url().map(|_| ())
    }

    /// Headers every request carries for `operation_id`, lowest precedence.
    pub fn default_headers_for(&self, operation_id: &str) -> Vec<(String, String)> {
        let mut headers = vec![
            ("User-Agent".to_string(), self.user_agent.clone()),
            (
                ANALYTICS_HEADER.to_string(),
                format!(
                    "service_name={};service_version={};operation_id={operation_id}",
                    self.service_name, self.service_version
                ),
            ),
        ];
        merge_headers(&mut headers, self.default_headers.clone());
        headers
    }
}
