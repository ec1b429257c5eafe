use shared::{Category, PhotoUploadResponse, SpendingStats, Transaction, UserProfile};

use super::{name_or_na, welcome_text};
use crate::services::config::PLACEHOLDER_PHOTO;
use crate::services::currency::{format_currency, format_optional_currency};
use crate::services::date_utils::format_long_date;
use crate::state::profile_view::{CategoryRow, ProfileView, TransactionRow};

pub fn update_user_info(view: &mut ProfileView, user: Option<&UserProfile>) {
    let Some(user) = user else { return };

    view.full_name = user.full_name.clone().unwrap_or_default();
    view.email = user.email.clone().unwrap_or_default();
    view.phone = user.phone.clone().unwrap_or_default();

    let photo_url = user
        .photo_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_PHOTO);
    view.photo_url = photo_url.to_string();
    view.header_avatar_url = photo_url.to_string();
    view.welcome_text = welcome_text(user);
}

/// Stat cards. The category and date cards only change when their section is
/// present; the monthly average is always rewritten.
pub fn update_spending_stats(view: &mut ProfileView, stats: Option<&SpendingStats>) {
    let Some(stats) = stats else { return };

    if let Some(most_spent) = &stats.most_spent_category {
        view.stats.most_spent_category = name_or_na(most_spent.name.as_deref());
        view.stats.most_spent_total = format!("Total: {}", format_optional_currency(most_spent.total));
    }

    if let Some(highest) = &stats.highest_spending_date {
        view.stats.highest_spending_date = match highest.date.as_deref() {
            Some(date) => format_long_date(date),
            None => "N/A".to_string(),
        };
        view.stats.highest_spending_total = format!("Total: {}", format_optional_currency(highest.total));
    }

    view.stats.monthly_average = format_optional_currency(stats.monthly_average);
}

pub fn update_transactions_list(view: &mut ProfileView, transactions: Option<&[Transaction]>) {
    let Some(transactions) = transactions else { return };

    view.transactions = transactions
        .iter()
        .map(|transaction| TransactionRow {
            date: format_long_date(&transaction.date),
            description: transaction.description.clone(),
            amount: format_currency(transaction.amount),
        })
        .collect();
}

pub fn update_categories_list(view: &mut ProfileView, categories: Option<&[Category]>) {
    let Some(categories) = categories else { return };

    view.categories = categories
        .iter()
        .map(|category| CategoryRow {
            id: category.id.clone(),
            name: category.name.clone(),
        })
        .collect();
}

/// Swap the profile image and the header avatar together
pub fn update_photo(view: &mut ProfileView, response: &PhotoUploadResponse) {
    let Some(url) = response.photo_url.as_deref().filter(|url| !url.is_empty()) else {
        return;
    };
    view.photo_url = url.to_string();
    view.header_avatar_url = url.to_string();
}
