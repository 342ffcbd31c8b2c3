use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{FailureKind, ProbeError};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    /// Per-probe ceiling. A stalled request settles as a `Timeout` failure
    /// instead of holding the discovery barrier open forever.
    pub request_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Determines whether a URL resolves to a loadable image.
///
/// There is no directory listing for static assets; existence is learned by
/// attempting a load and observing the outcome. Implementations must settle
/// exactly once per call.
#[async_trait::async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &Url) -> Result<(), ProbeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    settings: ProbeSettings,
}

impl ReqwestProbe {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ProbeError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ProbeError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Probe for ReqwestProbe {
    async fn probe(&self, url: &Url) -> Result<(), ProbeError> {
        let client = self.build_client()?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        match content_type.as_deref() {
            Some(ct) if is_image_content_type(ct) => Ok(()),
            _ => Err(ProbeError::new(
                FailureKind::NotAnImage { content_type },
                "not an image",
            )),
        }
    }
}

fn is_image_content_type(content_type: &str) -> bool {
    let ct = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim();
    ct.get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::new(FailureKind::Timeout, err.to_string());
    }
    ProbeError::new(FailureKind::Network, err.to_string())
}
