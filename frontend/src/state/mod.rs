pub mod dashboard_view;
pub mod profile_view;

pub use dashboard_view::{DashboardAction, DashboardView};
pub use profile_view::{ProfileAction, ProfileView};

/// Whether a mutation round-trip is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
}
