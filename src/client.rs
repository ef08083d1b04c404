//! Blocking client for the OpenAntrag API.
//!
//! All three lookups share one primitive: GET, require `200 OK` and a
//! non-empty body, decode JSON. They differ only in what happens when that
//! primitive fails, see [`FailurePolicy`].

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::{ConfigError, RequestError};
use crate::model::{Parliament, ProcessStep, Proposal};

/// What a lookup does with a [`RequestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the error and return a default value instead.
    Substitute,
    /// Hand the error to the caller.
    Propagate,
}

/// The lookups offered by [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    DisplayName,
    ProcessSteps,
    TopProposals,
}

impl Lookup {
    pub fn policy(self) -> FailurePolicy {
        match self {
            Lookup::DisplayName | Lookup::ProcessSteps => FailurePolicy::Substitute,
            Lookup::TopProposals => FailurePolicy::Propagate,
        }
    }
}

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// Performs a single GET. Implementations report only transport failures;
/// status and body checks happen in [`Client`].
pub trait Transport {
    fn get(&self, url: &Url) -> Result<RawResponse, RequestError>;
}

/// [`Transport`] backed by `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse, RequestError> {
        let transport_error = |e: reqwest::Error| RequestError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };
        let response = self
            .inner
            .get(url.clone())
            .send()
            .map_err(transport_error)?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = response.text().map_err(transport_error)?;
        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

/// OpenAntrag API client.
///
/// Construct one per process and reuse it; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    base: Url,
    transport: T,
}

impl Client<HttpTransport> {
    /// Builds a client with the HTTP transport described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let base = config.api_url()?;
        let transport = HttpTransport::new(&config.user_agent, config.timeout())?;
        Ok(Self::new(base, transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(base: Url, transport: T) -> Self {
        Self { base, transport }
    }

    /// GET `endpoint` and decode its JSON body as `R`.
    pub fn request<R: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<R, RequestError> {
        let url = endpoint.url(&self.base)?;
        debug!(%url, "GET");
        let response = self.transport.get(&url)?;
        debug!(%url, status = response.status, bytes = response.body.len(), "response");

        if response.status != 200 {
            return Err(RequestError::Status {
                url: url.to_string(),
                code: response.status,
                reason: response.reason,
            });
        }
        if response.body.is_empty() {
            return Err(RequestError::EmptyBody {
                url: url.to_string(),
            });
        }
        serde_json::from_str(&response.body).map_err(|source| RequestError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub fn try_display_name(&self, parliament: &str) -> Result<String, RequestError> {
        let descriptor: Parliament = self.request(&Endpoint::ParliamentByKey { parliament })?;
        Ok(descriptor.name2)
    }

    /// Display name of `parliament`.
    ///
    /// [`FailurePolicy::Substitute`]: on any request error the key itself is
    /// returned, so a page can always show something.
    pub fn display_name(&self, parliament: &str) -> String {
        self.try_display_name(parliament).unwrap_or_else(|err| {
            warn!(parliament, error = %err, "display name lookup failed, using key");
            parliament.to_string()
        })
    }

    pub fn try_process_steps(&self, parliament: &str) -> Result<Vec<ProcessStep>, RequestError> {
        self.request(&Endpoint::ProcessSteps { parliament })
    }

    /// Workflow stages of `parliament`.
    ///
    /// [`FailurePolicy::Substitute`]: on any request error an empty list is
    /// returned.
    pub fn process_steps(&self, parliament: &str) -> Vec<ProcessStep> {
        self.try_process_steps(parliament).unwrap_or_else(|err| {
            warn!(parliament, error = %err, "process steps lookup failed, using empty list");
            Vec::new()
        })
    }

    /// The latest `count` proposals of `parliament`, in API order.
    ///
    /// [`FailurePolicy::Propagate`]: there is no sensible default for a
    /// proposal list, so errors reach the caller.
    pub fn try_top_proposals(
        &self,
        parliament: &str,
        count: u32,
    ) -> Result<Vec<Proposal>, RequestError> {
        self.request(&Endpoint::TopProposals { parliament, count })
    }

    /// Alias of [`Client::try_top_proposals`]; this lookup never substitutes.
    pub fn top_proposals(&self, parliament: &str, count: u32) -> Result<Vec<Proposal>, RequestError> {
        self.try_top_proposals(parliament, count)
    }
}
