use yew::prelude::*;

use crate::state::dashboard_view::CategoryStatsView;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub total_spending: String,
    pub average_spending: String,
    pub total_transactions: String,
    pub category_stats: Option<CategoryStatsView>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="summary-cards">
            <div class="card total-spending">
                <h3>{"Total Spending"}</h3>
                <div class="amount">{&props.total_spending}</div>
            </div>
            <div class="card average-spending">
                <h3>{"Average Spending"}</h3>
                <div class="amount">{&props.average_spending}</div>
            </div>
            <div class="card total-orders">
                <h3>{"Transactions"}</h3>
                <div class="amount">{&props.total_transactions}</div>
            </div>
            <div class="card category-stats">
                {if let Some(stats) = &props.category_stats {
                    html! {
                        <>
                            <span class="stat-item">
                                <i class="fas fa-arrow-trend-up"></i>
                                {"Most: "}<strong>{&stats.most_spent}</strong>
                            </span>
                            <span class="stat-item">
                                <i class="fas fa-arrow-trend-down"></i>
                                {"Least: "}<strong>{&stats.least_spent}</strong>
                            </span>
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>
        </section>
    }
}
