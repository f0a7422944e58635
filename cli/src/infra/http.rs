//! HTTP infrastructure — implements `GatewayApi` with a blocking `ureq` agent.

use crate::application::ports::GatewayApi;
use crate::application::services::config_service::GatewaySettings;
use crate::domain::{ApiResponse, GatewayAddress, GatewayError};

const ACCEPT: &str = "application/json, text/plain";
const TOKEN_HEADER: &str = "X-Okapi-Token";

/// Production gateway client. One agent is shared by every call in a run.
pub struct UreqGateway {
    agent: ureq::Agent,
    address: GatewayAddress,
    token: Option<String>,
}

impl UreqGateway {
    #[must_use]
    pub fn new(settings: &GatewaySettings) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            address: settings.address.clone(),
            token: settings.token.clone(),
        }
    }

    fn send(&self, method: &str, path: &str) -> Result<ApiResponse, GatewayError> {
        let url = self.address.url(path);
        let mut request = self.agent.request(method, &url).set("Accept", ACCEPT);
        if let Some(token) = &self.token {
            request = request.set(TOKEN_HEADER, token);
        }

        // ureq reports 4xx/5xx as errors; here they are ordinary responses.
        match request.call() {
            Ok(response) | Err(ureq::Error::Status(_, response)) => {
                let status = response.status();
                let body = response.into_string().map_err(|e| GatewayError::Body {
                    url: url.clone(),
                    message: e.to_string(),
                })?;
                Ok(ApiResponse { status, body })
            }
            Err(ureq::Error::Transport(transport)) => Err(GatewayError::Transport {
                url,
                message: transport.to_string(),
            }),
        }
    }
}

impl GatewayApi for UreqGateway {
    fn get(&self, path: &str) -> Result<ApiResponse, GatewayError> {
        self.send("GET", path)
    }

    fn delete(&self, path: &str) -> Result<ApiResponse, GatewayError> {
        self.send("DELETE", path)
    }

    fn url(&self, path: &str) -> String {
        self.address.url(path)
    }
}
