use futures::join;
use shared::TimeRange;

use super::{settle, Effect};
use crate::services::api::FinanceApi;
use crate::state::DashboardAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCommand {
    Load,
    ChangeTimeRange(TimeRange),
}

pub struct DashboardController<A> {
    api: A,
}

impl<A: FinanceApi> DashboardController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn execute(&self, command: DashboardCommand) -> Vec<Effect<DashboardAction>> {
        match command {
            DashboardCommand::Load => {
                let (summary, user) = join!(self.api.get_dashboard(None), self.api.get_user());
                vec![
                    Effect::Apply(DashboardAction::SummaryLoaded(settle("fetching dashboard data", summary))),
                    Effect::Apply(DashboardAction::UserLoaded(settle("fetching user data", user))),
                ]
            }
            DashboardCommand::ChangeTimeRange(range) => {
                log::debug!("Switching dashboard range to {}", range.as_query());
                let summary = settle("updating time range", self.api.get_dashboard(Some(range)).await);
                vec![Effect::Apply(DashboardAction::RangeSummaryLoaded(summary))]
            }
        }
    }
}
