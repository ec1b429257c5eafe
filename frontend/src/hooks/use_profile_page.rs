use web_sys::File;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::run_effects;
use crate::controllers::profile::{ProfileCommand, ProfileController};
use crate::services::api::ApiClient;
use crate::state::{ProfileAction, ProfileView};

pub struct UseProfilePageResult {
    pub state: ProfileView,
    pub actions: ProfilePageActions,
}

#[derive(Clone, PartialEq)]
pub struct ProfilePageActions {
    /// Local view changes that need no network round-trip
    pub dispatch: Callback<ProfileAction>,
    /// Commands that go through the controller
    pub run: Callback<ProfileCommand<File>>,
}

#[hook]
pub fn use_profile_page(api_client: &ApiClient, landing_page: &str) -> UseProfilePageResult {
    let view = use_reducer(ProfileView::default);

    let controller = {
        let api_client = api_client.clone();
        let landing_page = landing_page.to_string();
        use_memo((), move |_| ProfileController::new(api_client, landing_page))
    };

    let run = {
        let dispatcher = view.dispatcher();
        use_callback((), move |command: ProfileCommand<File>, _| {
            let dispatcher = dispatcher.clone();
            let controller = controller.clone();

            spawn_local(async move {
                let tracks_pending = command.mutates_categories();
                if tracks_pending {
                    dispatcher.dispatch(ProfileAction::CategoryMutationStarted);
                }

                let effects = controller.execute(command).await;
                run_effects(&dispatcher, effects);

                if tracks_pending {
                    dispatcher.dispatch(ProfileAction::CategoryMutationFinished);
                }
            });
        })
    };

    let dispatch = {
        let dispatcher = view.dispatcher();
        use_callback((), move |action: ProfileAction, _| dispatcher.dispatch(action))
    };

    // Page-ready load
    use_effect_with((), {
        let run = run.clone();
        move |_| {
            run.emit(ProfileCommand::Load);
            || ()
        }
    });

    UseProfilePageResult {
        state: (*view).clone(),
        actions: ProfilePageActions { dispatch, run },
    }
}
