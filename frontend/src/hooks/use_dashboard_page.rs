use shared::TimeRange;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::run_effects;
use crate::controllers::dashboard::{DashboardCommand, DashboardController};
use crate::services::api::ApiClient;
use crate::state::{DashboardAction, DashboardView};

pub struct UseDashboardPageResult {
    pub state: DashboardView,
    pub actions: DashboardPageActions,
}

#[derive(Clone, PartialEq)]
pub struct DashboardPageActions {
    pub change_time_range: Callback<TimeRange>,
}

#[hook]
pub fn use_dashboard_page(api_client: &ApiClient) -> UseDashboardPageResult {
    let view = use_reducer(DashboardView::default);

    let controller = {
        let api_client = api_client.clone();
        use_memo((), move |_| DashboardController::new(api_client))
    };

    let run = {
        let dispatcher = view.dispatcher();
        use_callback((), move |command: DashboardCommand, _| {
            let dispatcher = dispatcher.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let effects = controller.execute(command).await;
                run_effects(&dispatcher, effects);
            });
        })
    };

    let change_time_range = {
        let dispatcher = view.dispatcher();
        let run = run.clone();
        use_callback((), move |range: TimeRange, _| {
            dispatcher.dispatch(DashboardAction::TimeRangeSelected(range));
            run.emit(DashboardCommand::ChangeTimeRange(range));
        })
    };

    use_effect_with((), {
        let run = run.clone();
        move |_| {
            run.emit(DashboardCommand::Load);
            || ()
        }
    });

    UseDashboardPageResult {
        state: (*view).clone(),
        actions: DashboardPageActions { change_time_range },
    }
}
