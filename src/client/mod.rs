//! Client layer: credentials, configuration, and the single blocking GET to the gateway.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{Password, SmsRequest, Username, ValidationError};

const DEFAULT_SEND_ENDPOINT: &str = "http://127.0.0.1:1401/send";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        // The url carries credentials; keep it out of error messages.
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(reqwest::Error::without_url)?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Jasmin HTTP API credentials, sent as `username` and `password` with every request.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate both parts and build [`Credentials`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, thiserror::Error)]
/// Non-successful HTTP status returned by the gateway.
#[error("unexpected HTTP status: {status}")]
pub struct HttpStatusError {
    pub status: u16,
    /// Response body, `None` when blank.
    pub body: Option<String>,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JasminClient`].
///
/// Every failure of [`JasminClient::send`] is a [`JasminError::RequestFailed`];
/// the other variants only come from building a client.
pub enum JasminError {
    /// The GET could not be completed: connection failure, timeout, or a
    /// non-2xx status (source is [`HttpStatusError`]).
    #[error("request failed: {0}")]
    RequestFailed(#[source] Box<dyn StdError + Send + Sync>),

    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    #[error("timeout must be greater than zero")]
    InvalidTimeout,

    /// The underlying HTTP client could not be constructed.
    #[error("http client error: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`JasminClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct JasminClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl JasminClientBuilder {
    /// Create a builder with the default endpoint and a 10 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the gateway `send` URL, e.g. `http://<server>:1401/send`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to the entire request (connect, send, and read).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`JasminClient`].
    pub fn build(self) -> Result<JasminClient, JasminError> {
        let endpoint = Url::parse(self.endpoint.trim()).map_err(JasminError::InvalidEndpoint)?;
        if self.timeout.is_zero() {
            return Err(JasminError::InvalidTimeout);
        }

        let mut builder = reqwest::blocking::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(JasminError::ClientBuild)?;

        Ok(JasminClient {
            credentials: self.credentials,
            endpoint,
            timeout: self.timeout,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Blocking client for the Jasmin HTTP API `send` call.
///
/// Each [`JasminClient::send`] issues exactly one GET; nothing is retried, so two
/// calls with the same request send two messages.
pub struct JasminClient {
    credentials: Credentials,
    endpoint: Url,
    timeout: Duration,
    http: Arc<dyn HttpTransport>,
}

impl JasminClient {
    /// Create a client for `http://127.0.0.1:1401/send` with a 10 second timeout.
    ///
    /// For more customization, use [`JasminClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, JasminError> {
        JasminClientBuilder::new(credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> JasminClientBuilder {
        JasminClientBuilder::new(credentials)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The full GET URL [`JasminClient::send`] would issue for `request`.
    ///
    /// The URL carries the credentials in clear text.
    pub fn send_url(&self, request: &SmsRequest) -> Url {
        let params = crate::transport::encode_send_query(
            request,
            self.credentials.username(),
            self.credentials.password(),
        );
        crate::transport::build_send_url(&self.endpoint, &params)
    }

    /// Send one SMS and return the gateway's response body as-is.
    ///
    /// Blocks until the gateway answers or the configured timeout expires.
    /// Receipt fields are sent as given; a requested receipt with missing
    /// callback fields is not rejected here.
    ///
    /// Errors:
    /// - [`JasminError::RequestFailed`] for transport failures, timeouts, and
    ///   non-2xx HTTP responses.
    pub fn send(&self, request: SmsRequest) -> Result<String, JasminError> {
        let url = self.send_url(&request);
        tracing::debug!(
            endpoint = %self.endpoint,
            to = request.to().raw(),
            dlr = request.options().dlr.requested,
            "sending sms"
        );

        let response = self.http.get(&url).map_err(|err| {
            tracing::warn!(error = %err, "sms request did not complete");
            JasminError::RequestFailed(err)
        })?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "gateway rejected sms request");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(JasminError::RequestFailed(Box::new(HttpStatusError {
                status: response.status,
                body,
            })));
        }

        tracing::debug!(status = response.status, "sms accepted by gateway");
        Ok(response.body)
    }
}

impl std::fmt::Debug for JasminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JasminClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
