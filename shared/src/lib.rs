use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Treats an explicit JSON `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile of the signed-in user as returned by `GET /api/user`.
///
/// Every field is optional; the backend omits what the user never filled in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Relative or absolute URL of the avatar image
    pub photo_url: Option<String>,
}

/// Identifier of a spending category.
///
/// The backend hands out either numeric or string keys, so both are accepted
/// and echoed back unchanged in the delete path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryId::Number(id) => write!(f, "{}", id),
            CategoryId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        CategoryId::Number(id)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single spending record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Timestamp as sent by the backend (ISO date or RFC 3339)
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Amount in Turkish lira
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: Option<String>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateTotal {
    pub date: Option<String>,
    pub total: Option<f64>,
}

/// Aggregates shown on the profile page stat cards (`GET /api/spending/stats`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingStats {
    pub most_spent_category: Option<CategoryTotal>,
    pub highest_spending_date: Option<DateTotal>,
    pub monthly_average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub most_spent: Option<String>,
    pub least_spent: Option<String>,
}

/// Everything the dashboard page renders, in one payload (`GET /api/dashboard`).
///
/// `category_spending` and `category_labels` are parallel sequences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_spending: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_spending: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_transactions: Vec<Transaction>,
    pub total_spending: Option<f64>,
    pub average_spending: Option<f64>,
    /// Count of transactions; kept as a number so float-encoded counts still parse
    pub total_transactions: Option<f64>,
    pub category_stats: Option<CategoryStats>,
}

/// Editable fields of the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::FullName, ProfileField::Email, ProfileField::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
        }
    }

    /// HTML input type used to render the field
    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::FullName => "text",
            ProfileField::Email => "email",
            ProfileField::Phone => "tel",
        }
    }
}

/// Body of `PUT /api/user/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFieldRequest {
    pub field: ProfileField,
    pub value: String,
}

/// Body of `POST /api/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploadResponse {
    pub photo_url: Option<String>,
}

/// Range selectable on the dashboard, sent as `?timeRange=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [TimeRange::Week, TimeRange::Month, TimeRange::Quarter, TimeRange::Year];

    pub fn as_query(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::Quarter => "Last 3 months",
            TimeRange::Year => "Last 12 months",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeRange(pub String);

impl fmt::Display for UnknownTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown time range: {}", self.0)
    }
}

impl std::error::Error for UnknownTimeRange {}

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.as_query() == s)
            .ok_or_else(|| UnknownTimeRange(s.to_string()))
    }
}
