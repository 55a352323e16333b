//! The restaurant's HTTP services.

use crate::{FetchClient, FetchError, Response};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taj_commerce::checkout::{OrderReceipt, OrderRequest};
use taj_commerce::config::EndpointConfig;
use taj_commerce::menu::CatalogEntry;
use taj_commerce::CategoryCode;
use tracing::warn;

/// An image shown by the restaurant-page carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// Services the storefront depends on.
#[async_trait(?Send)]
pub trait ShopApi {
    /// Catalog entries in any of the given categories.
    async fn menu_items(&self, categories: &[CategoryCode]) -> Result<Vec<CatalogEntry>, FetchError>;

    /// Submit an order. A parsed receipt is returned even when the service
    /// reports failure.
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderReceipt, FetchError>;

    /// Gallery images for a restaurant location.
    async fn gallery_images(&self, location: &str) -> Result<Vec<GalleryImage>, FetchError>;
}

/// [`ShopApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    client: FetchClient,
    endpoints: EndpointConfig,
}

impl HttpShopApi {
    pub fn new(client: FetchClient, endpoints: EndpointConfig) -> Self {
        Self { client, endpoints }
    }

    /// Value of the `categories` query parameter.
    pub fn categories_param(categories: &[CategoryCode]) -> String {
        categories
            .iter()
            .map(CategoryCode::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn gallery_path(&self, location: &str) -> String {
        format!(
            "{}/{}",
            self.endpoints.gallery_images.trim_end_matches('/'),
            location
        )
    }
}

/// Read the order service's answer. Error bodies may come with a non-2xx
/// status and still carry the receipt shape.
pub(crate) fn decode_receipt(response: Response) -> Result<OrderReceipt, FetchError> {
    match response.json::<OrderReceipt>() {
        Ok(receipt) => {
            if !response.is_success() {
                warn!(status = response.status, "Order service returned an error status");
            }
            Ok(receipt)
        }
        Err(e) if response.is_success() => Err(e),
        Err(_) => response.error_for_status().map(|_| OrderReceipt::default()),
    }
}

#[async_trait(?Send)]
impl ShopApi for HttpShopApi {
    async fn menu_items(&self, categories: &[CategoryCode]) -> Result<Vec<CatalogEntry>, FetchError> {
        self.client
            .get(self.endpoints.menu_items.as_str())
            .query("categories", Self::categories_param(categories))
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<OrderReceipt, FetchError> {
        let response = self
            .client
            .post(self.endpoints.create_order.as_str())
            .json(order)?
            .accept("application/json")
            .send()
            .await?;
        decode_receipt(response)
    }

    async fn gallery_images(&self, location: &str) -> Result<Vec<GalleryImage>, FetchError> {
        self.client
            .get(self.gallery_path(location))
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}
