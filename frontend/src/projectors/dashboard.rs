use shared::{DashboardSummary, UserProfile};

use super::{name_or_na, welcome_text};
use crate::services::currency::{format_count, format_currency, format_optional_currency};
use crate::services::date_utils::{format_short_date, month_labels};
use crate::state::dashboard_view::{
    CategoryStatsView, ChartSlice, DashboardView, DoughnutChartData, LineChartData, RecentTransactionRow,
};

/// Replace both chart datasets. Category labels and values are paired up to
/// the shorter of the two sequences.
pub fn update_charts(view: &mut DashboardView, summary: Option<&DashboardSummary>) {
    let Some(summary) = summary else { return };

    view.spending_chart = LineChartData {
        labels: month_labels(summary.monthly_spending.len()),
        values: summary.monthly_spending.clone(),
    };
    view.category_chart = DoughnutChartData {
        slices: summary
            .category_labels
            .iter()
            .zip(&summary.category_spending)
            .map(|(label, value)| ChartSlice {
                label: label.clone(),
                value: *value,
            })
            .collect(),
    };
}

pub fn update_recent_transactions(view: &mut DashboardView, summary: Option<&DashboardSummary>) {
    let Some(summary) = summary else { return };

    view.recent_transactions = summary
        .recent_transactions
        .iter()
        .map(|transaction| RecentTransactionRow {
            description: transaction.description.clone(),
            date: format_short_date(&transaction.date),
            amount: format_currency(transaction.amount),
        })
        .collect();
}

pub fn update_summary_cards(view: &mut DashboardView, summary: Option<&DashboardSummary>) {
    let Some(summary) = summary else { return };

    view.total_spending = format_optional_currency(summary.total_spending);
    view.average_spending = format_optional_currency(summary.average_spending);
    view.total_transactions = format_count(summary.total_transactions);

    if let Some(stats) = &summary.category_stats {
        view.category_stats = Some(CategoryStatsView {
            most_spent: name_or_na(stats.most_spent.as_deref()),
            least_spent: name_or_na(stats.least_spent.as_deref()),
        });
    }
}

pub fn update_user_info(view: &mut DashboardView, user: Option<&UserProfile>) {
    let Some(user) = user else { return };
    view.welcome_text = welcome_text(user);
}
