//! Client for the remote Markdown rendering endpoint.

use crate::error::ConvertError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::Serialize;
use std::time::Duration;

/// GitHub's Markdown rendering API.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/markdown";

/// Media type asking for the full HTML representation.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.VERSION.full+json";

pub const RENDER_MODE: &str = "gfm";

pub const RENDER_CONTEXT: &str = "github/gollum";

/// JSON body of a render request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub text: &'a str,
    pub mode: &'static str,
    pub context: &'static str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            mode: RENDER_MODE,
            context: RENDER_CONTEXT,
        }
    }
}

/// Sends Markdown to the endpoint and hands back whatever it answers.
#[derive(Debug, Clone)]
pub struct RemoteConverter {
    client: Client,
    endpoint: Url,
}

impl RemoteConverter {
    /// Builds a converter for `endpoint`. The URL is validated here so a bad
    /// value fails before any file is touched.
    pub fn new(endpoint: &str) -> Result<Self, ConvertError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ConvertError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn user_agent() -> &'static str {
        concat!("gh-markdown-html/", env!("CARGO_PKG_VERSION"))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Renders `markdown` remotely and returns the response body verbatim.
    ///
    /// The status code does not affect the result: an error page from the
    /// service is returned like any other body. Only transport failures are
    /// reported as errors.
    pub fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        log::debug!(
            "POST {} ({} bytes of Markdown)",
            self.endpoint,
            markdown.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .json(&ConversionRequest::new(markdown))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "Conversion endpoint answered with status {status}; writing the response body anyway."
            );
        }

        let body = response.text()?;
        log::debug!("Received {} bytes of HTML (status {status})", body.len());
        Ok(body)
    }
}
