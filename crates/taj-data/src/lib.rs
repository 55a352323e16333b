//! HTTP client and service API for the TAJ ordering widget.
//!
//! Provides a small builder API over `reqwest` (which uses `fetch` when
//! compiled for the browser) and the [`ShopApi`] trait the storefront talks
//! to: catalog lookups, order creation and gallery images.
//!
//! # Example
//!
//! ```rust,ignore
//! use taj_data::{FetchClient, HttpShopApi, ShopApi};
//! use taj_commerce::config::EndpointConfig;
//! use taj_commerce::CategoryCode;
//!
//! let client = FetchClient::new().with_base_url("https://taj.example");
//! let api = HttpShopApi::new(client, EndpointConfig::default());
//!
//! let curries = api.menu_items(&[CategoryCode::new("11")]).await?;
//! ```

mod api;
mod error;
mod request;
mod response;

pub use api::{GalleryImage, HttpShopApi, ShopApi};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use tracing::debug;

/// HTTP client for making outbound requests.
///
/// This is a lightweight wrapper around a `reqwest::Client` that provides
/// a convenient builder API for constructing and sending requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        ClientRequestBuilder {
            client: self.client.clone(),
            builder: RequestBuilder::new(method, self.resolve(url.into())),
        }
    }

    /// Prepend the base URL to a relative path.
    pub fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    client: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// The request as built so far.
    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    ///
    /// Non-2xx statuses are returned as responses, not errors; see
    /// [`Response::error_for_status`].
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            query,
            headers,
            body,
        } = self.builder;
        debug!(method = method.as_str(), url = %url, "Sending request");

        let mut request = self.client.request(method.to_reqwest(), &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        for (key, value) in headers {
            request = request.header(key, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "Received response");

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpShopApi, Method, Response, ShopApi};
}
