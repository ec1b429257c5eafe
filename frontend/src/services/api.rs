use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    Category, CategoryId, CreateCategoryRequest, DashboardSummary, PhotoUploadResponse,
    ProfileField, SpendingStats, TimeRange, Transaction, UpdateFieldRequest, UserProfile,
};
use thiserror::Error;
use web_sys::{File, FormData, RequestCredentials};

/// Backend routes the dashboard talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    UserInfo,
    UpdateProfile,
    UpdatePhoto,
    Categories,
    Transactions,
    Logout,
    SpendingStats,
    Dashboard,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::UserInfo => "/api/user",
            Endpoint::UpdateProfile => "/api/user/update",
            Endpoint::UpdatePhoto => "/api/user/photo",
            Endpoint::Categories => "/api/categories",
            Endpoint::Transactions => "/api/transactions",
            Endpoint::Logout => "/api/logout",
            Endpoint::SpendingStats => "/api/spending/stats",
            Endpoint::Dashboard => "/api/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote operations used by the page controllers.
///
/// Each method issues exactly one request. `Photo` is whatever the platform
/// hands us from a file picker (`web_sys::File` in the browser).
#[async_trait(?Send)]
pub trait FinanceApi {
    type Photo;

    async fn get_user(&self) -> ApiResult<UserProfile>;
    async fn update_user_field(&self, field: ProfileField, value: &str) -> ApiResult<UserProfile>;
    async fn update_photo(&self, photo: Self::Photo) -> ApiResult<PhotoUploadResponse>;
    async fn get_categories(&self) -> ApiResult<Vec<Category>>;
    async fn add_category(&self, name: &str) -> ApiResult<Category>;
    async fn delete_category(&self, id: &CategoryId) -> ApiResult<()>;
    async fn get_spending_stats(&self) -> ApiResult<SpendingStats>;
    async fn get_transactions(&self) -> ApiResult<Vec<Transaction>>;
    async fn get_dashboard(&self, range: Option<TimeRange>) -> ApiResult<DashboardSummary>;
    async fn logout(&self) -> ApiResult<()>;
}

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the page's own origin
    pub fn new() -> Self {
        Self::with_base_url(String::new())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub fn category_url(&self, id: &CategoryId) -> String {
        format!("{}/{}", self.url(Endpoint::Categories), id)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let response = Request::get(&self.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl FinanceApi for ApiClient {
    type Photo = File;

    async fn get_user(&self) -> ApiResult<UserProfile> {
        self.get_json(Endpoint::UserInfo).await
    }

    async fn update_user_field(&self, field: ProfileField, value: &str) -> ApiResult<UserProfile> {
        let body = UpdateFieldRequest {
            field,
            value: value.to_string(),
        };
        let response = Request::put(&self.url(Endpoint::UpdateProfile))
            .json(&body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn update_photo(&self, photo: File) -> ApiResult<PhotoUploadResponse> {
        let form = FormData::new().map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        form.append_with_blob("photo", &photo)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;

        // The browser sets the multipart boundary itself, so no Content-Type here
        let response = Request::post(&self.url(Endpoint::UpdatePhoto))
            .body(form)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_json(Endpoint::Categories).await
    }

    async fn add_category(&self, name: &str) -> ApiResult<Category> {
        let body = CreateCategoryRequest {
            name: name.to_string(),
        };
        let response = Request::post(&self.url(Endpoint::Categories))
            .json(&body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn delete_category(&self, id: &CategoryId) -> ApiResult<()> {
        let response = Request::delete(&self.category_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn get_spending_stats(&self) -> ApiResult<SpendingStats> {
        self.get_json(Endpoint::SpendingStats).await
    }

    async fn get_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.get_json(Endpoint::Transactions).await
    }

    async fn get_dashboard(&self, range: Option<TimeRange>) -> ApiResult<DashboardSummary> {
        let mut request = Request::get(&self.url(Endpoint::Dashboard));
        if let Some(range) = range {
            request = request.query([("timeRange", range.as_query())]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn logout(&self) -> ApiResult<()> {
        let response = Request::post(&self.url(Endpoint::Logout))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_registry_paths() {
        assert_eq!(Endpoint::UserInfo.path(), "/api/user");
        assert_eq!(Endpoint::UpdateProfile.path(), "/api/user/update");
        assert_eq!(Endpoint::UpdatePhoto.path(), "/api/user/photo");
        assert_eq!(Endpoint::Categories.path(), "/api/categories");
        assert_eq!(Endpoint::Transactions.path(), "/api/transactions");
        assert_eq!(Endpoint::Logout.path(), "/api/logout");
        assert_eq!(Endpoint::SpendingStats.path(), "/api/spending/stats");
        assert_eq!(Endpoint::Dashboard.path(), "/api/dashboard");
    }

    #[test]
    fn test_same_origin_urls() {
        let client = ApiClient::new();
        assert_eq!(client.url(Endpoint::UserInfo), "/api/user");
        assert_eq!(client.category_url(&CategoryId::Number(7)), "/api/categories/7");
    }

    #[test]
    fn test_custom_base_url_drops_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(client.url(Endpoint::Dashboard), "http://localhost:5000/api/dashboard");
        assert_eq!(
            client.category_url(&CategoryId::from("groceries")),
            "http://localhost:5000/api/categories/groceries"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 404: not found");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }
}
