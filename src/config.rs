//! Client Configuration

use std::time::Duration;

/// Endpoint used when the page does not name one
pub const DEFAULT_ENDPOINT: &str = "/api/todos";

/// How long a status message stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Attribute on `<body>` that overrides the API endpoint
const ENDPOINT_ATTR: &str = "data-api-endpoint";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub notice_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            notice_duration: NOTICE_DURATION,
        }
    }
}

impl ClientConfig {
    /// Build the config from the host page, falling back to defaults
    pub fn from_document() -> Self {
        let endpoint = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(ENDPOINT_ATTR));
        Self::default().with_endpoint(endpoint.as_deref())
    }

    /// Override the endpoint; blank values keep the current one
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(ep) = endpoint.map(str::trim).filter(|ep| !ep.is_empty()) {
            self.endpoint = ep.to_string();
        }
        self
    }
}
