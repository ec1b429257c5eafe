use yew::prelude::*;

use crate::state::profile_view::TransactionRow;

#[derive(Properties, PartialEq)]
pub struct TransactionsListProps {
    pub transactions: Vec<TransactionRow>,
}

#[function_component(TransactionsList)]
pub fn transactions_list(props: &TransactionsListProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Recent Transactions"}</h2>
            <div class="transactions-list">
                {for props.transactions.iter().map(|transaction| html! {
                    <div class="transaction-item">
                        <div class="transaction-info">
                            <span class="transaction-date">{&transaction.date}</span>
                            <span class="transaction-description">{&transaction.description}</span>
                        </div>
                        <span class="transaction-amount">{&transaction.amount}</span>
                    </div>
                })}
            </div>
        </section>
    }
}
