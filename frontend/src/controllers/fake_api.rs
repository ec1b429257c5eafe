use std::cell::RefCell;

use async_trait::async_trait;
use shared::{
    Category, CategoryId, DashboardSummary, PhotoUploadResponse, ProfileField, SpendingStats, TimeRange,
    Transaction, UserProfile,
};

use crate::services::api::{ApiError, ApiResult, FinanceApi};

/// In-memory backend. A `None` response makes the call fail with a 500.
#[derive(Default)]
pub struct FakeApi {
    pub user: Option<UserProfile>,
    pub updated_user: Option<UserProfile>,
    pub photo: Option<PhotoUploadResponse>,
    pub categories: Option<Vec<Category>>,
    pub created_category: Option<Category>,
    pub delete_succeeds: bool,
    pub stats: Option<SpendingStats>,
    pub transactions: Option<Vec<Transaction>>,
    pub dashboard: Option<DashboardSummary>,
    pub logout_error: Option<ApiError>,
    pub call_log: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.call_log.borrow().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.call_log.borrow().iter().filter(|call| call.starts_with(prefix)).count()
    }

    fn respond<T: Clone>(&self, call: String, response: &Option<T>) -> ApiResult<T> {
        self.call_log.borrow_mut().push(call);
        response.clone().ok_or_else(|| ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        })
    }
}

#[async_trait(?Send)]
impl FinanceApi for FakeApi {
    type Photo = String;

    async fn get_user(&self) -> ApiResult<UserProfile> {
        self.respond("get_user".to_string(), &self.user)
    }

    async fn update_user_field(&self, field: ProfileField, value: &str) -> ApiResult<UserProfile> {
        self.respond(format!("update_user_field:{:?}={}", field, value), &self.updated_user)
    }

    async fn update_photo(&self, photo: String) -> ApiResult<PhotoUploadResponse> {
        self.respond(format!("update_photo:{}", photo), &self.photo)
    }

    async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.respond("get_categories".to_string(), &self.categories)
    }

    async fn add_category(&self, name: &str) -> ApiResult<Category> {
        self.respond(format!("add_category:{}", name), &self.created_category)
    }

    async fn delete_category(&self, id: &CategoryId) -> ApiResult<()> {
        let outcome = self.delete_succeeds.then_some(());
        self.respond(format!("delete_category:{}", id), &outcome)
    }

    async fn get_spending_stats(&self) -> ApiResult<SpendingStats> {
        self.respond("get_spending_stats".to_string(), &self.stats)
    }

    async fn get_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.respond("get_transactions".to_string(), &self.transactions)
    }

    async fn get_dashboard(&self, range: Option<TimeRange>) -> ApiResult<DashboardSummary> {
        let call = match range {
            Some(range) => format!("get_dashboard:{}", range.as_query()),
            None => "get_dashboard".to_string(),
        };
        self.respond(call, &self.dashboard)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.call_log.borrow_mut().push("logout".to_string());
        match &self.logout_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
