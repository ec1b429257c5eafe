use yew::prelude::*;

use crate::state::dashboard_view::RecentTransactionRow;

#[derive(Properties, PartialEq)]
pub struct RecentTransactionsProps {
    pub transactions: Vec<RecentTransactionRow>,
}

#[function_component(RecentTransactions)]
pub fn recent_transactions(props: &RecentTransactionsProps) -> Html {
    html! {
        <section class="recent-transactions">
            <h2>{"Recent Transactions"}</h2>
            <div class="transaction-list">
                {for props.transactions.iter().map(|transaction| html! {
                    <div class="transaction-item">
                        <div>
                            <div>{&transaction.description}</div>
                            <small>{&transaction.date}</small>
                        </div>
                        <div class="transaction-amount">{&transaction.amount}</div>
                    </div>
                })}
            </div>
        </section>
    }
}
