//! HTTP gateway adapters built on reqwest.

mod endpoints;
mod identity_client;
mod market_client;

pub use endpoints::{Endpoints, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use identity_client::HttpIdentityGateway;
pub use market_client::HttpMarketGateway;

use serde::de::DeserializeOwned;

use rewear_application::GatewayError;
use rewear_domain::ApiEnvelope;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("rewear-client/", env!("CARGO_PKG_VERSION"));

/// Request timeout; timeouts resolve to a transport failure outcome.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Builds the shared reqwest client.
fn build_client() -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GatewayError::Transport(e.to_string()))
}

/// Maps reqwest errors to the gateway error taxonomy.
fn map_transport_error(error: &reqwest::Error) -> GatewayError {
    if error.is_decode() {
        GatewayError::Malformed(error.to_string())
    } else {
        GatewayError::Transport(error.to_string())
    }
}

/// Reads a response body and unwraps the standard envelope.
///
/// Non-2xx statuses and `success: false` envelopes both become
/// [`GatewayError::Rejected`], carrying the backend message when the
/// body still parsed as an envelope.
async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| map_transport_error(&e))?;

    let envelope: ApiEnvelope<T> = match serde_json::from_str(&text) {
        Ok(envelope) => envelope,
        // A 2xx body that doesn't parse is a broken backend; a non-2xx
        // body is allowed to be anything.
        Err(e) if status.is_success() => return Err(GatewayError::Malformed(e.to_string())),
        Err(_) => {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: None,
            })
        }
    };

    if !status.is_success() || !envelope.success {
        return Err(GatewayError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        });
    }

    envelope
        .data
        .ok_or_else(|| GatewayError::Malformed("envelope is missing data".to_string()))
}

/// Like [`unwrap_envelope`] but discards the payload.
async fn ensure_success(response: reqwest::Response) -> Result<(), GatewayError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| map_transport_error(&e))?;

    let envelope: ApiEnvelope<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(GatewayError::Malformed(e.to_string())),
        Err(_) => {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: None,
            })
        }
    };

    if !status.is_success() || !envelope.success {
        return Err(GatewayError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        });
    }

    Ok(())
}
