use std::rc::Rc;

use shared::{DashboardSummary, TimeRange, UserProfile};
use yew::Reducible;

use crate::projectors::dashboard as project;

/// Monthly spending line chart dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

/// Spending-by-category doughnut dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoughnutChartData {
    pub slices: Vec<ChartSlice>,
}

impl DoughnutChartData {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentTransactionRow {
    pub description: String,
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatsView {
    pub most_spent: String,
    pub least_spent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub spending_chart: LineChartData,
    pub category_chart: DoughnutChartData,
    pub recent_transactions: Vec<RecentTransactionRow>,
    pub total_spending: String,
    pub average_spending: String,
    pub total_transactions: String,
    pub category_stats: Option<CategoryStatsView>,
    pub welcome_text: String,
    pub time_range: TimeRange,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            spending_chart: LineChartData::default(),
            category_chart: DoughnutChartData::default(),
            recent_transactions: Vec::new(),
            total_spending: "₺0".to_string(),
            average_spending: "₺0".to_string(),
            total_transactions: "0".to_string(),
            category_stats: None,
            welcome_text: "Welcome".to_string(),
            time_range: TimeRange::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Initial summary: feeds charts, recent transactions and summary cards
    SummaryLoaded(Option<DashboardSummary>),
    /// Summary for a newly selected range: charts and cards only
    RangeSummaryLoaded(Option<DashboardSummary>),
    UserLoaded(Option<UserProfile>),
    TimeRangeSelected(TimeRange),
}

impl DashboardView {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SummaryLoaded(summary) => {
                project::update_charts(self, summary.as_ref());
                project::update_recent_transactions(self, summary.as_ref());
                project::update_summary_cards(self, summary.as_ref());
            }
            DashboardAction::RangeSummaryLoaded(summary) => {
                project::update_charts(self, summary.as_ref());
                project::update_summary_cards(self, summary.as_ref());
            }
            DashboardAction::UserLoaded(user) => project::update_user_info(self, user.as_ref()),
            DashboardAction::TimeRangeSelected(range) => self.time_range = range,
        }
    }
}

impl Reducible for DashboardView {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = (*self).clone();
        view.apply(action);
        Rc::new(view)
    }
}
