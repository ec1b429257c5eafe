use std::rc::Rc;

use shared::{Category, CategoryId, PhotoUploadResponse, ProfileField, SpendingStats, Transaction, UserProfile};
use yew::Reducible;

use super::MutationStatus;
use crate::projectors::profile as project;
use crate::services::config::PLACEHOLDER_PHOTO;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCards {
    pub most_spent_category: String,
    pub most_spent_total: String,
    pub highest_spending_date: String,
    pub highest_spending_total: String,
    pub monthly_average: String,
}

impl Default for StatCards {
    fn default() -> Self {
        Self {
            most_spent_category: "N/A".to_string(),
            most_spent_total: "Total: ₺0".to_string(),
            highest_spending_date: "N/A".to_string(),
            highest_spending_total: "Total: ₺0".to_string(),
            monthly_average: "₺0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub amount: String,
}

/// One entry of the category list; `id` is what the delete button sends
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
}

/// In-progress edit of a single profile field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub field: ProfileField,
    pub draft: String,
}

/// Everything the profile page shows, built once per page session and
/// replaced wholesale through [`ProfileAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
    pub header_avatar_url: String,
    pub welcome_text: String,
    pub stats: StatCards,
    pub transactions: Vec<TransactionRow>,
    pub categories: Vec<CategoryRow>,
    pub category_input: String,
    pub category_status: MutationStatus,
    pub dropdown_open: bool,
    pub editing: Option<FieldEdit>,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            photo_url: PLACEHOLDER_PHOTO.to_string(),
            header_avatar_url: PLACEHOLDER_PHOTO.to_string(),
            welcome_text: "Welcome".to_string(),
            stats: StatCards::default(),
            transactions: Vec::new(),
            categories: Vec::new(),
            category_input: String::new(),
            category_status: MutationStatus::Idle,
            dropdown_open: false,
            editing: None,
        }
    }
}

impl ProfileView {
    pub fn field_value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
        }
    }

    pub fn apply(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::UserLoaded(user) => project::update_user_info(self, user.as_ref()),
            ProfileAction::StatsLoaded(stats) => project::update_spending_stats(self, stats.as_ref()),
            ProfileAction::TransactionsLoaded(transactions) => {
                project::update_transactions_list(self, transactions.as_deref())
            }
            ProfileAction::CategoriesLoaded(categories) => {
                project::update_categories_list(self, categories.as_deref())
            }
            ProfileAction::PhotoUploaded(response) => project::update_photo(self, &response),
            ProfileAction::CategoryInputChanged(value) => self.category_input = value,
            ProfileAction::CategoryInputCleared => self.category_input.clear(),
            ProfileAction::CategoryMutationStarted => self.category_status = MutationStatus::Pending,
            ProfileAction::CategoryMutationFinished => self.category_status = MutationStatus::Idle,
            ProfileAction::ToggleDropdown => self.dropdown_open = !self.dropdown_open,
            ProfileAction::CloseDropdown => self.dropdown_open = false,
            ProfileAction::StartEdit(field) => {
                self.editing = Some(FieldEdit {
                    field,
                    draft: self.field_value(field).to_string(),
                });
            }
            ProfileAction::EditDraftChanged(value) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.draft = value;
                }
            }
            ProfileAction::CancelEdit => self.editing = None,
            ProfileAction::FieldSaved(user) => {
                project::update_user_info(self, Some(&user));
                self.editing = None;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    UserLoaded(Option<UserProfile>),
    StatsLoaded(Option<SpendingStats>),
    TransactionsLoaded(Option<Vec<Transaction>>),
    CategoriesLoaded(Option<Vec<Category>>),
    PhotoUploaded(PhotoUploadResponse),
    CategoryInputChanged(String),
    CategoryInputCleared,
    CategoryMutationStarted,
    CategoryMutationFinished,
    ToggleDropdown,
    CloseDropdown,
    StartEdit(ProfileField),
    EditDraftChanged(String),
    CancelEdit,
    FieldSaved(UserProfile),
}

impl Reducible for ProfileView {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = (*self).clone();
        view.apply(action);
        Rc::new(view)
    }
}
