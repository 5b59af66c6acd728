//! REST API access for the asset collection.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! List reads fail on rejection, non-success status, or an undecodable body.
//! Mutations only fail on rejection; their status and body come back in an
//! [`Ack`] and the caller decides what to do with them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Asset, AssetId, NewAsset};
use crate::state::search::SearchQuery;

/// Status and raw body of a completed mutation request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
    pub body: String,
}

impl Ack {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Operations the controller needs from the remote collection resource.
///
/// Futures are not `Send`: the browser runs them on the main thread.
#[async_trait::async_trait(?Send)]
pub trait AssetApi {
    /// `GET {base}` — the full collection in server order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on rejection, non-success status, or a body
    /// that is not a JSON array of assets.
    async fn list(&self) -> Result<Vec<Asset>, ApiError>;

    /// `GET {base}/search?...` — the filtered collection.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AssetApi::list`].
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Asset>, ApiError>;

    /// `POST {base}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] only if the request was rejected.
    async fn create(&self, asset: &NewAsset) -> Result<Ack, ApiError>;

    /// `DELETE {base}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] only if the request was rejected.
    async fn delete(&self, id: &AssetId) -> Result<Ack, ApiError>;
}

/// Collection resource URL.
pub fn collection_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_owned()
}

/// Single-resource URL; the id is percent-encoded as one path segment.
pub fn asset_url(base_url: &str, id: &AssetId) -> String {
    format!("{}/{}", collection_url(base_url), urlencoding::encode(id.as_str()))
}

/// Search URL with only the populated filters in the query string.
pub fn search_url(base_url: &str, query: &SearchQuery) -> String {
    let params = query
        .params()
        .into_iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
        .collect::<Vec<_>>();
    let base = format!("{}/search", collection_url(base_url));
    if params.is_empty() { base } else { format!("{base}?{}", params.join("&")) }
}

/// Decode a JSON array of assets from a response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON array of assets.
pub fn decode_asset_list(body: &str) -> Result<Vec<Asset>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// [`AssetApi`] over HTTP against a configured collection URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAssetApi {
    base_url: String,
}

impl HttpAssetApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl AssetApi for HttpAssetApi {
    async fn list(&self) -> Result<Vec<Asset>, ApiError> {
        fetch_asset_list(&collection_url(&self.base_url)).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Asset>, ApiError> {
        fetch_asset_list(&search_url(&self.base_url, query)).await
    }

    async fn create(&self, asset: &NewAsset) -> Result<Ack, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&collection_url(&self.base_url))
                .json(asset)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(into_ack(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = asset;
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, id: &AssetId) -> Result<Ack, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&asset_url(&self.base_url, id))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(into_ack(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

async fn fetch_asset_list(url: &str) -> Result<Vec<Asset>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(status, &body));
        }
        decode_asset_list(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

// A body that cannot be read is treated as empty; mutations never act on it.
#[cfg(feature = "csr")]
async fn into_ack(resp: gloo_net::http::Response) -> Ack {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ack { status, body }
}
