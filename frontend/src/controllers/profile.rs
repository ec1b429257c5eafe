use futures::join;
use shared::{CategoryId, ProfileField};

use super::{settle, Effect};
use crate::services::api::{ApiError, FinanceApi};
use crate::state::ProfileAction;

/// User intents on the profile page. `P` is the picked photo file.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileCommand<P> {
    /// Page-ready: fetch user, stats, transactions and categories together
    Load,
    /// Raw text of the add-category input
    AddCategory(String),
    DeleteCategory(CategoryId),
    UploadPhoto(P),
    SaveField { field: ProfileField, value: String },
    Logout,
}

impl<P> ProfileCommand<P> {
    /// Commands that drive the category list through its pending state
    pub fn mutates_categories(&self) -> bool {
        matches!(self, ProfileCommand::AddCategory(_) | ProfileCommand::DeleteCategory(_))
    }
}

pub struct ProfileController<A> {
    api: A,
    landing_page: String,
}

impl<A: FinanceApi> ProfileController<A> {
    pub fn new(api: A, landing_page: impl Into<String>) -> Self {
        Self {
            api,
            landing_page: landing_page.into(),
        }
    }

    pub async fn execute(&self, command: ProfileCommand<A::Photo>) -> Vec<Effect<ProfileAction>> {
        match command {
            ProfileCommand::Load => self.load().await,
            ProfileCommand::AddCategory(input) => self.add_category(&input).await,
            ProfileCommand::DeleteCategory(id) => self.delete_category(&id).await,
            ProfileCommand::UploadPhoto(photo) => self.upload_photo(photo).await,
            ProfileCommand::SaveField { field, value } => self.save_field(field, &value).await,
            ProfileCommand::Logout => self.logout().await,
        }
    }

    async fn load(&self) -> Vec<Effect<ProfileAction>> {
        let (user, stats, transactions, categories) = join!(
            self.api.get_user(),
            self.api.get_spending_stats(),
            self.api.get_transactions(),
            self.api.get_categories()
        );

        vec![
            Effect::Apply(ProfileAction::UserLoaded(settle("fetching user data", user))),
            Effect::Apply(ProfileAction::StatsLoaded(settle("fetching spending stats", stats))),
            Effect::Apply(ProfileAction::TransactionsLoaded(settle("fetching transactions", transactions))),
            Effect::Apply(ProfileAction::CategoriesLoaded(settle("fetching categories", categories))),
        ]
    }

    async fn refresh_categories(&self) -> Effect<ProfileAction> {
        let categories = settle("fetching categories", self.api.get_categories().await);
        Effect::Apply(ProfileAction::CategoriesLoaded(categories))
    }

    async fn add_category(&self, input: &str) -> Vec<Effect<ProfileAction>> {
        let name = input.trim();
        if name.is_empty() {
            return Vec::new();
        }

        match settle("adding category", self.api.add_category(name).await) {
            Some(created) => {
                log::info!("Added category {} ({})", created.name, created.id);
                vec![
                    Effect::Apply(ProfileAction::CategoryInputCleared),
                    self.refresh_categories().await,
                ]
            }
            None => Vec::new(),
        }
    }

    async fn delete_category(&self, id: &CategoryId) -> Vec<Effect<ProfileAction>> {
        match settle("deleting category", self.api.delete_category(id).await) {
            Some(()) => vec![self.refresh_categories().await],
            None => Vec::new(),
        }
    }

    async fn upload_photo(&self, photo: A::Photo) -> Vec<Effect<ProfileAction>> {
        match settle("uploading photo", self.api.update_photo(photo).await) {
            Some(response) if response.photo_url.is_some() => {
                vec![Effect::Apply(ProfileAction::PhotoUploaded(response))]
            }
            _ => Vec::new(),
        }
    }

    async fn save_field(&self, field: ProfileField, value: &str) -> Vec<Effect<ProfileAction>> {
        match settle("updating user field", self.api.update_user_field(field, value).await) {
            Some(user) => vec![Effect::Apply(ProfileAction::FieldSaved(user))],
            None => Vec::new(),
        }
    }

    async fn logout(&self) -> Vec<Effect<ProfileAction>> {
        match self.api.logout().await {
            Ok(()) => vec![Effect::Navigate(self.landing_page.clone())],
            Err(ApiError::Status { status, .. }) => {
                log::error!("Logout failed with status {}", status);
                vec![Effect::Alert("Failed to logout. Please try again.".to_string())]
            }
            Err(e) => {
                log::error!("Logout error: {}", e);
                vec![Effect::Alert("An error occurred while logging out".to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake_api::FakeApi;
    use crate::state::ProfileView;
    use shared::{Category, PhotoUploadResponse, SpendingStats, Transaction, UserProfile};

    fn apply(view: &mut ProfileView, effects: Vec<Effect<ProfileAction>>) {
        for effect in effects {
            if let Effect::Apply(action) = effect {
                view.apply(action);
            }
        }
    }

    fn food() -> Category {
        Category {
            id: CategoryId::Number(1),
            name: "Food".to_string(),
        }
    }

    fn healthy_api() -> FakeApi {
        FakeApi {
            user: Some(UserProfile {
                full_name: Some("Selin Arslan".to_string()),
                email: Some("selin@example.com".to_string()),
                ..UserProfile::default()
            }),
            stats: Some(SpendingStats {
                monthly_average: Some(2500.0),
                ..SpendingStats::default()
            }),
            transactions: Some(vec![Transaction {
                date: "2025-04-02".to_string(),
                description: "Groceries".to_string(),
                amount: 640.0,
            }]),
            categories: Some(vec![food()]),
            ..FakeApi::default()
        }
    }

    fn controller(api: FakeApi) -> ProfileController<FakeApi> {
        ProfileController::new(api, "index.html")
    }

    #[tokio::test]
    async fn test_load_renders_every_section() {
        let controller = controller(healthy_api());
        let mut view = ProfileView::default();

        let effects = controller.execute(ProfileCommand::Load).await;
        assert_eq!(effects.len(), 4);
        apply(&mut view, effects);

        assert_eq!(view.welcome_text, "Welcome, Selin Arslan");
        assert_eq!(view.stats.monthly_average, "₺2,500");
        assert_eq!(view.transactions.len(), 1);
        assert_eq!(view.categories.len(), 1);
        assert_eq!(controller.api.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_load_isolates_failed_fetch() {
        let controller = controller(FakeApi {
            stats: None,
            ..healthy_api()
        });
        let mut view = ProfileView::default();
        let initial_stats = view.stats.clone();

        let effects = controller.execute(ProfileCommand::Load).await;
        assert!(effects.contains(&Effect::Apply(ProfileAction::StatsLoaded(None))));
        apply(&mut view, effects);

        assert_eq!(view.stats, initial_stats);
        assert_eq!(view.email, "selin@example.com");
        assert_eq!(view.transactions[0].amount, "₺640");
        assert_eq!(view.categories[0].name, "Food");
    }

    #[tokio::test]
    async fn test_add_blank_category_makes_no_calls() {
        let controller = controller(healthy_api());

        for input in ["", "   ", "\t\n"] {
            let effects = controller.execute(ProfileCommand::AddCategory(input.to_string())).await;
            assert!(effects.is_empty());
        }
        assert!(controller.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_category_clears_input_and_refetches_once() {
        let controller = controller(FakeApi {
            created_category: Some(Category {
                id: CategoryId::Number(2),
                name: "Travel".to_string(),
            }),
            ..healthy_api()
        });
        let mut view = ProfileView::default();
        view.apply(ProfileAction::CategoryInputChanged("  Travel ".to_string()));

        let effects = controller
            .execute(ProfileCommand::AddCategory(view.category_input.clone()))
            .await;

        let clears = effects
            .iter()
            .filter(|e| **e == Effect::Apply(ProfileAction::CategoryInputCleared))
            .count();
        assert_eq!(clears, 1);
        assert_eq!(controller.api.call_count("get_categories"), 1);
        assert_eq!(controller.api.calls(), vec!["add_category:Travel", "get_categories"]);

        apply(&mut view, effects);
        assert_eq!(view.category_input, "");
        assert_eq!(view.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_add_category_failure_leaves_input() {
        let controller = controller(healthy_api());
        let mut view = ProfileView::default();
        view.apply(ProfileAction::CategoryInputChanged("Rent".to_string()));

        let effects = controller.execute(ProfileCommand::AddCategory("Rent".to_string())).await;
        assert!(effects.is_empty());
        assert_eq!(controller.api.call_count("get_categories"), 0);

        apply(&mut view, effects);
        assert_eq!(view.category_input, "Rent");
    }

    #[tokio::test]
    async fn test_delete_is_bound_to_rendered_id() {
        let controller = controller(FakeApi {
            delete_succeeds: true,
            ..healthy_api()
        });
        let mut view = ProfileView::default();
        view.apply(ProfileAction::CategoriesLoaded(Some(vec![food()])));

        let id = view.categories[0].id.clone();
        let effects = controller.execute(ProfileCommand::DeleteCategory(id)).await;

        assert_eq!(controller.api.calls(), vec!["delete_category:1", "get_categories"]);
        assert_eq!(effects.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_does_not_rerender() {
        let controller = controller(healthy_api());
        let mut view = ProfileView::default();
        view.apply(ProfileAction::CategoriesLoaded(Some(vec![food()])));
        let before = view.clone();

        let effects = controller
            .execute(ProfileCommand::DeleteCategory(CategoryId::Number(1)))
            .await;
        assert!(effects.is_empty());
        assert_eq!(controller.api.call_count("get_categories"), 0);

        apply(&mut view, effects);
        assert_eq!(view, before);
    }

    #[tokio::test]
    async fn test_photo_upload_swaps_both_avatars() {
        let controller = controller(FakeApi {
            photo: Some(PhotoUploadResponse {
                photo_url: Some("/img/x.png".to_string()),
            }),
            ..healthy_api()
        });
        let mut view = ProfileView::default();

        let effects = controller
            .execute(ProfileCommand::UploadPhoto("avatar.png".to_string()))
            .await;
        assert_eq!(effects.len(), 1);
        apply(&mut view, effects);

        assert_eq!(view.photo_url, "/img/x.png");
        assert_eq!(view.header_avatar_url, "/img/x.png");
    }

    #[tokio::test]
    async fn test_photo_upload_failure_is_silent() {
        let controller = controller(healthy_api());
        let effects = controller
            .execute(ProfileCommand::UploadPhoto("avatar.png".to_string()))
            .await;
        assert!(effects.is_empty());
        assert_eq!(controller.api.calls(), vec!["update_photo:avatar.png"]);
    }

    #[tokio::test]
    async fn test_save_field() {
        let controller = controller(FakeApi {
            updated_user: Some(UserProfile {
                full_name: Some("Selin Arslan".to_string()),
                phone: Some("555-0101".to_string()),
                ..UserProfile::default()
            }),
            ..healthy_api()
        });
        let mut view = ProfileView::default();
        view.apply(ProfileAction::StartEdit(ProfileField::Phone));

        let effects = controller
            .execute(ProfileCommand::SaveField {
                field: ProfileField::Phone,
                value: "555-0101".to_string(),
            })
            .await;
        apply(&mut view, effects);

        assert_eq!(controller.api.calls(), vec!["update_user_field:Phone=555-0101"]);
        assert_eq!(view.phone, "555-0101");
        assert!(view.editing.is_none());
    }

    #[tokio::test]
    async fn test_save_field_failure_keeps_edit_open() {
        let controller = controller(healthy_api());
        let mut view = ProfileView::default();
        view.apply(ProfileAction::StartEdit(ProfileField::Email));
        view.apply(ProfileAction::EditDraftChanged("x@y.z".to_string()));

        let effects = controller
            .execute(ProfileCommand::SaveField {
                field: ProfileField::Email,
                value: "x@y.z".to_string(),
            })
            .await;
        apply(&mut view, effects);

        assert_eq!(view.editing.as_ref().map(|e| e.draft.as_str()), Some("x@y.z"));
    }

    #[tokio::test]
    async fn test_logout_navigates_to_landing_page() {
        let controller = controller(healthy_api());
        let effects = controller.execute(ProfileCommand::Logout).await;
        assert_eq!(effects, vec![Effect::Navigate("index.html".to_string())]);
    }

    #[tokio::test]
    async fn test_logout_failures_alert() {
        let rejected = controller(FakeApi {
            logout_error: Some(ApiError::Status {
                status: 401,
                body: String::new(),
            }),
            ..FakeApi::default()
        });
        assert_eq!(
            rejected.execute(ProfileCommand::Logout).await,
            vec![Effect::Alert("Failed to logout. Please try again.".to_string())]
        );

        let offline = controller(FakeApi {
            logout_error: Some(ApiError::Network("connection refused".to_string())),
            ..FakeApi::default()
        });
        assert_eq!(
            offline.execute(ProfileCommand::Logout).await,
            vec![Effect::Alert("An error occurred while logging out".to_string())]
        );
    }

    #[test]
    fn test_category_mutations_flagged() {
        assert!(ProfileCommand::<String>::AddCategory("x".to_string()).mutates_categories());
        assert!(ProfileCommand::<String>::DeleteCategory(CategoryId::Number(1)).mutates_categories());
        assert!(!ProfileCommand::<String>::Load.mutates_categories());
    }
}
