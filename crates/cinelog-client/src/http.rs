//! HTTP access to a running cinelog daemon

use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use cinelog_api::{requests::CreateMovieRequest, responses::HealthcheckResponse};

use crate::error::{ClientError, Result};

/// Client for the daemon's `/v1` endpoints
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base: Url,
}

impl HttpClient {
    /// Point a client at a daemon base URL such as `http://localhost:4000`
    ///
    /// # Errors
    /// Fails when `base` is not a parseable absolute URL.
    pub fn new(base: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base, Client::new())
    }

    /// Like [`HttpClient::new`], reusing a preconfigured `reqwest::Client`
    ///
    /// # Errors
    /// Fails when `base` is not a parseable absolute URL.
    pub fn with_client(base: impl AsRef<str>, http: Client) -> Result<Self> {
        Ok(Self {
            http,
            base: Url::parse(base.as_ref())?,
        })
    }

    /// Daemon health status
    ///
    /// # Errors
    /// Fails on transport errors or a non-2xx reply.
    ///
    /// # Example
    /// ```no_run
    /// # use cinelog_client::HttpClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let health = HttpClient::new("http://localhost:4000")?.healthcheck().await?;
    /// println!("{} ({})", health.status, health.environment);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn healthcheck(&self) -> Result<HealthcheckResponse> {
        let reply = self.http.get(self.base.join("/v1/healthcheck")?).send().await?;
        Ok(checked(reply).await?.json().await?)
    }

    /// Fetch one movie record as raw JSON
    ///
    /// # Errors
    /// Fails on transport errors or a non-2xx reply.
    pub async fn get_movie(&self, id: i64) -> Result<Value> {
        let reply = self
            .http
            .get(self.base.join(&format!("/v1/movies/{id}"))?)
            .send()
            .await?;
        Ok(checked(reply).await?.json().await?)
    }

    /// Submit a movie for creation
    ///
    /// The daemon currently echoes the parsed input back as plain text.
    ///
    /// # Errors
    /// Fails on transport errors or a non-2xx reply.
    pub async fn create_movie(&self, request: &CreateMovieRequest) -> Result<String> {
        let reply = self
            .http
            .post(self.base.join("/v1/movies")?)
            .json(request)
            .send()
            .await?;
        Ok(checked(reply).await?.text().await?)
    }
}

/// Turn a non-2xx reply into [`ClientError::Api`], keeping its body as the message
async fn checked(reply: Response) -> Result<Response> {
    let status = reply.status();
    if status.is_success() {
        return Ok(reply);
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message: reply.text().await.unwrap_or_default(),
    })
}
