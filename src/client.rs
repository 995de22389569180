//! Cloud Foundry API client.
//!
//! Low-level HTTP client that handles authentication and raw exchanges.
//! Higher-level operations are implemented via traits on resource types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{CfError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::request::{serialize, ApiRequest};
use crate::resolve::{resolve, Completion};
use crate::response::decode;

const USER_AGENT: &str = concat!("cfapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Cloud Foundry API client.
///
/// Handles authentication and HTTP exchanges. Resource-specific operations
/// are implemented via the `Get`, `List`, `Create`, `Update` and `Delete`
/// traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. Calls share no other state and may run concurrently.
///
/// # Example
///
/// ```no_run
/// use cfapi::CloudFoundryClient;
///
/// # fn example() -> cfapi::Result<()> {
/// // Create from environment variables
/// let client = CloudFoundryClient::from_env()?;
///
/// // Or configure manually
/// let client = CloudFoundryClient::new("access-token", "https://api.example.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CloudFoundryClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for CloudFoundryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudFoundryClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CloudFoundryClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CF_API_URL` for the API root and `CF_ACCESS_TOKEN` for bearer
    /// authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("CF_API_URL").map_err(|_| {
            CfError::ConfigMissing("CF_API_URL environment variable not set".to_string())
        })?;
        let token = env::var("CF_ACCESS_TOKEN").map_err(|_| {
            CfError::ConfigMissing("CF_ACCESS_TOKEN environment variable not set".to_string())
        })?;

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and API root.
    ///
    /// # Arguments
    ///
    /// * `token` - OAuth access token, sent as a bearer token
    /// * `base_url` - API root (e.g., `https://api.example.com`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(CfError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a serialized request.
    ///
    /// The query string is already encoded and is attached verbatim.
    pub fn url_for(&self, request: &HttpRequest) -> Result<Url> {
        let mut url = self.base_url.join(request.path.trim_start_matches('/'))?;
        if !request.query.is_empty() {
            url.set_query(Some(&request.query.to_string()));
        }
        Ok(url)
    }

    /// Execute one exchange and hand back status, headers and body.
    ///
    /// Every status is returned as a response; only transport failures
    /// are errors here.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = self.url_for(request)?;

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .bearer_auth(&self.token);
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(CfError::HttpError)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body = response.text().await.map_err(CfError::HttpError)?;

        let response = HttpResponse {
            status,
            headers,
            body,
        };
        tracing::debug!(
            status,
            request_id = response.header("x-vcap-request-id"),
            "received response"
        );
        Ok(response)
    }

    /// Serialize `request` and execute it.
    ///
    /// Construction errors surface before anything is sent.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<HttpResponse> {
        let http_request = serialize(request)?;
        tracing::debug!(call = %http_request.path_and_query(), method = %http_request.method, "sending request");
        self.execute(&http_request).await
    }

    /// Send a read request and decode the resource or collection.
    pub async fn fetch<R, T>(&self, request: &R) -> Result<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let response = self.send(request).await?;
        decode(&response)
    }

    /// Send a mutating request and resolve it to a resource, job or nothing.
    pub async fn mutate<R, T>(&self, request: &R) -> Result<Completion<T>>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let response = self.send(request).await?;
        resolve(&response, request.is_async())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::QueryString;
    use crate::http::HttpMethod;

    #[test]
    fn test_client_debug() {
        let client = CloudFoundryClient::new("test-token", "https://api.example.com").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("CloudFoundryClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = CloudFoundryClient::new("token", "https://api.example.com").unwrap();
        let client2 = CloudFoundryClient::new("token", "https://api.example.com/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_url_keeps_encoded_query() {
        let client = CloudFoundryClient::new("token", "https://api.example.com/cf").unwrap();
        let mut request = HttpRequest {
            method: HttpMethod::Get,
            path: "/v2/private_domains".to_string(),
            query: QueryString::new(),
            body: None,
        };
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://api.example.com/cf/v2/private_domains"
        );

        let mut query = QueryString::new();
        query.push_filter(&crate::filter::FilterParameter::is_in(
            "name",
            &["test-name.com".to_string()],
        ));
        query.push("page", -1);
        request.query = query;
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://api.example.com/cf/v2/private_domains?q=name%20IN%20test-name.com&page=-1"
        );
    }
}
