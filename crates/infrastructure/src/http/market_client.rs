//! Reqwest adapter for the catalog and swap routes.

use async_trait::async_trait;
use reqwest::Client;

use rewear_application::{CatalogGateway, GatewayError, SwapGateway};
use rewear_domain::{ClothingItem, Credential, ItemData, SwapRequestBody};

use super::{build_client, ensure_success, map_transport_error, unwrap_envelope, Endpoints};

/// Gateway for the item catalog and swap request routes.
///
/// One adapter implements both ports; they share a client and the
/// endpoint table.
#[derive(Debug, Clone)]
pub struct HttpMarketGateway {
    client: Client,
    endpoints: Endpoints,
}

impl HttpMarketGateway {
    /// Creates a gateway with the default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(endpoints: Endpoints) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client()?,
            endpoints,
        })
    }

    /// Creates a gateway with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl CatalogGateway for HttpMarketGateway {
    async fn fetch_item(&self, item_id: &str) -> Result<ClothingItem, GatewayError> {
        let url = self.endpoints.item(item_id);
        tracing::debug!(%url, "fetching item");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let data: ItemData = unwrap_envelope(response).await?;
        Ok(data.item)
    }
}

#[async_trait]
impl SwapGateway for HttpMarketGateway {
    async fn submit_request(
        &self,
        credential: Option<&Credential>,
        body: &SwapRequestBody,
    ) -> Result<(), GatewayError> {
        let url = self.endpoints.swap_request();
        tracing::debug!(%url, item = %body.item_id, "submitting swap request");

        let mut request = self.client.post(url.clone()).json(body);
        if let Some(credential) = credential {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                credential.authorization_header(),
            );
        }

        let response = request.send().await.map_err(|e| map_transport_error(&e))?;
        ensure_success(response).await
    }
}
