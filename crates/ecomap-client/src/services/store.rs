//! REST adapter for the external point document collection.
//!
//! Four calls against `{endpoint}/points`: fetch-all, insert (id assigned
//! by the store), partial update by id, delete by id. No retry, no
//! timeout, no request sequencing; concurrent mutations race with
//! last-write-wins at the store.

use ecomap_core::{NewPoint, Point, PointId, PointPatch, StoreError};
use gloo::net::http::{Request, Response};

const ENDPOINT_OVERRIDE_KEY: &str = "$ecomap$/config/store-endpoint";

/// Handle to the point collection, established once per session from the
/// window origin or a localStorage override.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStoreService {
    base_url: String,
}

impl PointStoreService {
    /// Trailing slashes are trimmed so overrides like `…/api/` do not
    /// produce `…//points` URLs.
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_window() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(endpoint)) = storage.get_item(ENDPOINT_OVERRIDE_KEY) {
                if !endpoint.is_empty() {
                    return Ok(Self::new(&endpoint));
                }
            }
        }

        let origin = window
            .location()
            .origin()
            .map_err(|_| StoreError::Unavailable)?;
        Ok(Self::new(&format!("{origin}/api")))
    }

    fn collection_url(&self) -> String {
        format!("{}/points", self.base_url)
    }

    fn document_url(&self, id: &PointId) -> String {
        format!("{}/points/{id}", self.base_url)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Point>, StoreError> {
        let response = Request::get(&self.collection_url())
            .send()
            .await
            .map_err(request_error)?;
        expect_ok(&response)?;
        response.json().await.map_err(request_error)
    }

    pub async fn insert(&self, point: &NewPoint) -> Result<Point, StoreError> {
        let response = Request::post(&self.collection_url())
            .json(point)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        expect_ok(&response)?;
        response.json().await.map_err(request_error)
    }

    /// Merge semantics: fields absent from the patch are left untouched
    /// server-side.
    pub async fn update_fields(&self, id: &PointId, patch: &PointPatch) -> Result<(), StoreError> {
        let response = Request::patch(&self.document_url(id))
            .json(patch)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        expect_ok(&response)?;
        Ok(())
    }

    /// Deleting an id the store no longer has counts as success; the local
    /// entry is gone either way.
    pub async fn delete(&self, id: &PointId) -> Result<(), StoreError> {
        let response = Request::delete(&self.document_url(id))
            .send()
            .await
            .map_err(request_error)?;
        if !response.ok() && response.status() != 404 {
            return Err(status_error(&response));
        }
        Ok(())
    }
}

fn expect_ok(response: &Response) -> Result<(), StoreError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response))
    }
}

fn request_error(error: gloo::net::Error) -> StoreError {
    StoreError::Operation(error.to_string())
}

fn status_error(response: &Response) -> StoreError {
    StoreError::Operation(format!("unexpected status {}", response.status()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_urls_from_base() {
        let store = PointStoreService::new("https://maps.example/api");

        assert_eq!(store.collection_url(), "https://maps.example/api/points");
        assert_eq!(
            store.document_url(&PointId::from("abc123")),
            "https://maps.example/api/points/abc123"
        );
    }

    #[wasm_bindgen_test]
    fn test_trailing_slash_not_doubled() {
        let store = PointStoreService::new("http://localhost:8090/api/");

        assert_eq!(
            store.document_url(&PointId::from("p-1")),
            "http://localhost:8090/api/points/p-1"
        );
        assert!(!store.collection_url().contains("//points"));
    }
}
