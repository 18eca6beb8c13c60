use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::debug;

use crate::config::{ProbeConfig, ProbeMethod};
use crate::errors::{AppError, AppResult};

/// Result of a single liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with this status code
    Status(u16),
    /// No answer within the probe timeout
    TimedOut,
    /// Connection, DNS or TLS failure
    Failed(String),
}

impl ProbeOutcome {
    /// Only an exact HTTP 200 counts as a live resource
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Status(200))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Status(code) => write!(f, "HTTP {code}"),
            ProbeOutcome::TimedOut => write!(f, "timed out"),
            ProbeOutcome::Failed(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

/// HTTP access used by logo resolution
///
/// Probes never error: every failure mode is folded into a [`ProbeOutcome`]
/// so callers can move on to the next tier.
#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// Check whether `url` answers with HTTP 200
    async fn probe(&self, url: &str) -> ProbeOutcome;

    /// Download the body of `url`, failing on any non-success status
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>>;
}

/// [`HttpProbe`] backed by a shared reqwest client
pub struct ReqwestProbe {
    client: Client,
    timeout: Duration,
    method: ProbeMethod,
}

impl ReqwestProbe {
    pub fn new(config: &ProbeConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
            method: config.method,
        })
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response, ProbeOutcome> {
        self.client
            .request(method, url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeOutcome::TimedOut
                } else {
                    ProbeOutcome::Failed(e.to_string())
                }
            })
    }

    /// One probe attempt; a HEAD rejected with 405/501 is re-sent as GET
    async fn probe_once(&self, url: &str) -> ProbeOutcome {
        let method = match self.method {
            ProbeMethod::Head => Method::HEAD,
            ProbeMethod::Get => Method::GET,
        };

        let status = match self.send(method.clone(), url).await {
            Ok(response) => response.status(),
            Err(outcome) => {
                debug!("Probe {} {}: {}", method, url, outcome);
                return outcome;
            }
        };

        // Some static hosts reject HEAD outright
        if method == Method::HEAD
            && (status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED)
        {
            debug!("HEAD {} answered {}, falling back to GET", url, status);
            return match self.send(Method::GET, url).await {
                Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
                Err(outcome) => outcome,
            };
        }

        debug!("Probe {} {}: HTTP {}", method, url, status);
        ProbeOutcome::Status(status.as_u16())
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    /// The whole attempt, including any GET fallback, shares one deadline
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match tokio::time::timeout(self.timeout, self.probe_once(url)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!("Probe {} timed out after {:?}", url, self.timeout);
                ProbeOutcome::TimedOut
            }
        }
    }

    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        debug!("Fetching {}", url);

        let response = match tokio::time::timeout(self.timeout, self.send(Method::GET, url)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeOutcome::TimedOut),
        }
        .map_err(|outcome| AppError::external_service("http_client", format!("{url}: {outcome}")))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::external_service(
                "http_client",
                format!(
                    "HTTP error: {} {} - URL: {}",
                    response.status().as_u16(),
                    response.status().canonical_reason().unwrap_or("Unknown"),
                    url
                ),
            ));
        }

        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
