// web_app/api/rest.rs - Remote Product API operations
//
// Thin wrappers over the four REST calls the view issues. Philosophy:
// pure functions on a client handle, typed results, no retries and no
// timeouts - one attempt per invocation, exactly what the caller asked
// for.

use crate::web_app::model::{ProductDraft, ProductPage};

/// Base URL of the remote API when `PRODUCT_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://localhost:7287";

/// Failure taxonomy for remote calls
///
/// Exactly two kinds are distinguished: the request completed with a
/// non-success status, or it never completed (DNS, TLS, connection,
/// body decode). Callers handle both identically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Status(reqwest::StatusCode),
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client handle for the remote Product API
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from `PRODUCT_API_URL`, falling back to the default
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let base_url = std::env::var("PRODUCT_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        anyhow::ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "PRODUCT_API_URL must be an http(s) URL, got '{base_url}'"
        );
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the paged list endpoint
    pub fn list_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/api/Product?page={}&pageSize={}",
            self.base_url, page, page_size
        )
    }

    /// URL of the collection endpoint (create)
    pub fn collection_url(&self) -> String {
        format!("{}/api/Product", self.base_url)
    }

    /// URL of a single product resource (update, delete)
    pub fn resource_url(&self, id: i32) -> String {
        format!("{}/api/Product/{}", self.base_url, id)
    }

    /// Fetch one page of products
    pub async fn list_page(&self, page: u32, page_size: u32) -> Result<ProductPage, ApiError> {
        let response = self.client.get(self.list_url(page, page_size)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json::<ProductPage>().await?)
    }

    /// Create a product; any 2xx is success and the body is ignored
    pub async fn create(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response.status())
    }

    /// Full-replace update of one product; any 2xx is success
    pub async fn update(&self, id: i32, draft: &ProductDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.resource_url(id))
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response.status())
    }

    /// Delete one product; any 2xx is success
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let response = self.client.delete(self.resource_url(id)).send().await?;
        Self::expect_success(response.status())
    }

    fn expect_success(status: reqwest::StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_carries_page_and_size() {
        let api = ProductApi::new("https://localhost:7287");
        assert_eq!(
            api.list_url(3, 25),
            "https://localhost:7287/api/Product?page=3&pageSize=25"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let api = ProductApi::new("http://api.example.com/");
        assert_eq!(api.collection_url(), "http://api.example.com/api/Product");
        assert_eq!(api.resource_url(42), "http://api.example.com/api/Product/42");
    }

    #[test]
    fn test_status_error_displays_status() {
        let err = ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let text = err.to_string();
        assert!(text.contains("500"), "got: {text}");
    }

    #[test]
    fn test_expect_success_accepts_any_2xx() {
        for code in [200u16, 201, 204] {
            let status = reqwest::StatusCode::from_u16(code).unwrap();
            assert!(ProductApi::expect_success(status).is_ok(), "status {code}");
        }
        for code in [301u16, 400, 404, 500] {
            let status = reqwest::StatusCode::from_u16(code).unwrap();
            assert!(ProductApi::expect_success(status).is_err(), "status {code}");
        }
    }
}
