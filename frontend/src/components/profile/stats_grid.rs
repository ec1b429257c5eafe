use yew::prelude::*;

use crate::state::profile_view::StatCards;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: StatCards,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let stats = &props.stats;
    html! {
        <section class="stats-grid">
            <div class="stat-card">
                <h3>{"Most Spent Category"}</h3>
                <div class="stat-value">{&stats.most_spent_category}</div>
                <div class="stat-detail">{&stats.most_spent_total}</div>
            </div>
            <div class="stat-card">
                <h3>{"Highest Spending Day"}</h3>
                <div class="stat-value">{&stats.highest_spending_date}</div>
                <div class="stat-detail">{&stats.highest_spending_total}</div>
            </div>
            <div class="stat-card">
                <h3>{"Monthly Average"}</h3>
                <div class="stat-value">{&stats.monthly_average}</div>
            </div>
        </section>
    }
}
