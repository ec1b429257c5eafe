pub mod category_chart;
pub mod recent_transactions;
pub mod spending_chart;
pub mod summary_cards;
pub mod time_range_select;

pub use category_chart::CategoryChart;
pub use recent_transactions::RecentTransactions;
pub use spending_chart::SpendingChart;
pub use summary_cards::SummaryCards;
pub use time_range_select::TimeRangeSelect;
