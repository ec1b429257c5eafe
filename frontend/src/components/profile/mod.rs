pub mod category_manager;
pub mod profile_card;
pub mod stats_grid;
pub mod transactions_list;

pub use category_manager::CategoryManager;
pub use profile_card::ProfileCard;
pub use stats_grid::StatsGrid;
pub use transactions_list::TransactionsList;
