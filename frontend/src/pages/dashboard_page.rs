use yew::prelude::*;

use crate::components::dashboard::{
    CategoryChart, RecentTransactions, SpendingChart, SummaryCards, TimeRangeSelect,
};
use crate::hooks::use_dashboard_page::use_dashboard_page;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let page = use_dashboard_page(&props.api_client);
    let view = page.state;

    html! {
        <main class="dashboard-page">
            <header class="dashboard-header">
                <h1 id="welcomeText">{&view.welcome_text}</h1>
                <TimeRangeSelect
                    selected={view.time_range}
                    on_change={page.actions.change_time_range.clone()}
                />
            </header>
            <SummaryCards
                total_spending={view.total_spending.clone()}
                average_spending={view.average_spending.clone()}
                total_transactions={view.total_transactions.clone()}
                category_stats={view.category_stats.clone()}
            />
            <section class="charts-grid">
                <SpendingChart data={view.spending_chart.clone()} />
                <CategoryChart data={view.category_chart.clone()} />
            </section>
            <RecentTransactions transactions={view.recent_transactions.clone()} />
        </main>
    }
}
